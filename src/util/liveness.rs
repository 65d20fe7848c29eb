//! Per-component liveness flag for in-flight requests.
//!
//! Requests are not cancellable, so a page spawns its future with a
//! `Liveness` clone and drops the result when the page was unmounted in the
//! meantime.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Flag retired automatically when the current reactive owner is cleaned up.
    pub fn scoped() -> Self {
        let liveness = Self::new();
        let on_drop = liveness.clone();
        leptos::prelude::on_cleanup(move || on_drop.retire());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Runs `apply` only while the owner is still mounted.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}
