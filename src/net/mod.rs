//! Networking: REST client, wire types and the API error taxonomy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns HTTP calls and the `Backend` seam, `types` defines the wire
//! schema, and `error` reduces failures to user-facing text.

pub mod api;
pub mod error;
pub mod types;
