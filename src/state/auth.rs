//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` by `App`. Route guards and user-aware
//! components read it; login, profile refresh and logout write it.
//!
//! DESIGN
//! ======
//! Startup renders from the persisted session immediately, then runs exactly
//! one profile refresh when a token is present. A failed refresh keeps the
//! token and drops the cached user instead of logging the user out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Session, SessionStore};
use crate::net::api::Backend;
use crate::net::types::User;
use crate::util::nav::Destination;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// A profile refresh is in flight.
    pub refreshing: bool,
}

impl AuthState {
    /// Startup state: a stored token means a refresh is about to run.
    pub fn from_session(session: Option<Session>) -> Self {
        let refreshing = session.is_some();
        Self {
            session,
            refreshing,
        }
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            refreshing: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().and_then(|s| s.user.as_ref())
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// True once startup settled without a known user.
///
/// A token whose profile refresh failed does not identify anyone.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.refreshing && state.user().is_none()
}

/// Refreshes the cached user with one `/user/profile` call.
///
/// Success persists the new user only while `token` is still the stored
/// token; a logout or another login during the request wins. Failure is
/// logged and yields a session without a user. Never clears the token.
pub async fn refresh_profile<B, S>(backend: &B, store: &S, token: &str) -> Session
where
    B: Backend,
    S: SessionStore,
{
    match backend.fetch_profile(token).await {
        Ok(user) => {
            if store.load().is_some_and(|current| current.token == token) {
                log::debug!("profile refreshed for user {}", user.id);
                store.save_user(&user);
            } else {
                log::debug!("session changed during profile refresh, not caching user");
            }
            Session::new(token, Some(user))
        }
        Err(e) => {
            log::warn!("profile refresh failed: {e}");
            Session::new(token, None)
        }
    }
}

/// Clears persisted credentials; the caller resets in-memory state and
/// follows the returned destination.
pub fn logout<S: SessionStore>(store: &S) -> Destination {
    store.clear();
    log::info!("signed out");
    Destination::Login
}
