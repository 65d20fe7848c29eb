//! Application state and the flows that mutate it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session persistence, auth lifecycle, email verification and billing rules.
//! Everything here is plain Rust driven through the `Backend` and
//! `SessionStore` traits, so it runs natively under test.

pub mod auth;
pub mod billing;
pub mod session;
pub mod verify;
