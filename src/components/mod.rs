//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shell chrome and presentational pieces shared by pages. Components read
//! shared state from Leptos context; text they show comes from `state`.

pub mod alert;
pub mod footer;
pub mod header;
pub mod plan_card;
pub mod subscription_card;
