//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that need a signed-in user apply identical redirect
//! behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_unauth};
use crate::util::nav::{Destination, go};

/// Redirect to `/login` once startup settled without a session.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            go(&navigate, &Destination::Login);
        }
    });
}
