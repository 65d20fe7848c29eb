//! Utility helpers shared across pages and flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page logic to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod liveness;
pub mod nav;
pub mod once;
pub mod storage;
pub mod validate;
