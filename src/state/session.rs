//! Persisted login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and cached user survive reloads in `localStorage` under the
//! `authToken` and `user` keys. The app reads them synchronously at startup,
//! then refreshes the user once from `/user/profile` (see `state::auth`).
//!
//! DESIGN
//! ======
//! Storage sits behind `SessionStore` so flows are tested against
//! `MemorySessionStore` while pages use `BrowserSessionStore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;
use crate::util::storage;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

/// A logged-in session: the bearer token plus the last known user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// `None` until a profile fetch succeeds, or after it failed.
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

pub trait SessionStore {
    /// Persisted session, if any. A cached user without a token is no session.
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn save_user(&self, user: &User);
    fn clear(&self);
}

/// `localStorage`-backed store used by pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let token = storage::load_string(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Session::new(token, storage::load_json(USER_KEY)))
    }

    fn save(&self, session: &Session) {
        storage::save_string(AUTH_TOKEN_KEY, &session.token);
        match &session.user {
            Some(user) => storage::save_json(USER_KEY, user),
            None => storage::remove(USER_KEY),
        }
    }

    fn save_user(&self, user: &User) {
        storage::save_json(USER_KEY, user);
    }

    fn clear(&self) {
        storage::remove(AUTH_TOKEN_KEY);
        storage::remove(USER_KEY);
    }
}

/// In-memory store holding the same raw key/value pairs as `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        let token = self.raw(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = self
            .raw(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        Some(Session::new(token, user))
    }

    fn save(&self, session: &Session) {
        self.set_raw(AUTH_TOKEN_KEY, &session.token);
        match &session.user {
            Some(user) => self.save_user(user),
            None => {
                self.lock().remove(USER_KEY);
            }
        }
    }

    fn save_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.set_raw(USER_KEY, &raw),
            Err(e) => log::warn!("failed to encode cached user: {e}"),
        }
    }

    fn clear(&self) {
        let mut entries = self.lock();
        entries.remove(AUTH_TOKEN_KEY);
        entries.remove(USER_KEY);
    }
}
