//! Tab-scoped "at most once per key" registry.
//!
//! Backs the verification token ledger and checkout-session reconciliation.
//! `Arc<Mutex<_>>` only because Leptos context values must be `Send + Sync`;
//! everything runs on the single UI thread.

#[cfg(test)]
#[path = "once_test.rs"]
mod once_test;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, Default)]
pub struct OnceRegistry(Arc<Mutex<HashSet<String>>>);

impl OnceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `key` is claimed, `false` afterwards.
    pub fn claim(&self, key: &str) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned())
    }

    /// Forgets `key` so a later `claim` succeeds again.
    pub fn release(&self, key: &str) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}
