//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads context, spawns the
//! flow from `forms`/`state` and applies the result while still mounted.
//! Rendering details live in `components`.

pub mod checkout_success;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod reset_password;
pub mod signup;
pub mod subscriptions;
pub mod verify_email;
