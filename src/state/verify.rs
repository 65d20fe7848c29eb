//! Email verification state machine.
//!
//! DESIGN
//! ======
//! `Loading` is the only non-terminal state. A page without a token starts
//! in `Error`. Tokens are single-use, so the tab keeps a ledger of tokens
//! already submitted: a replay resolves to `Error` without touching the
//! network, and `Success` is reachable at most once per token. A request
//! that never reached the server releases its claim so the user can retry.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use crate::net::api::Backend;
use crate::net::error::ApiError;
use crate::util::once::OnceRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyStatus {
    Loading,
    Success,
    Error,
    Expired,
}

impl VerifyStatus {
    pub fn is_terminal(self) -> bool {
        self != Self::Loading
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Loading => "Verifying Email",
            Self::Success => "Email Verified!",
            Self::Error => "Verification Failed",
            Self::Expired => "Link Expired",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Loading => "Please wait while we verify your email address...",
            Self::Success => {
                "Your email has been successfully verified. You can now sign in to your account."
            }
            Self::Error => {
                "Something went wrong. The verification link may be invalid or has expired."
            }
            Self::Expired => "This verification link has expired. Request a new one below.",
        }
    }
}

/// Verification request derived from the page URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyFlow {
    token: Option<String>,
    status: VerifyStatus,
}

impl VerifyFlow {
    pub fn new(token: Option<String>) -> Self {
        let token = token
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());
        let status = if token.is_some() {
            VerifyStatus::Loading
        } else {
            VerifyStatus::Error
        };
        Self { token, status }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn status(&self) -> VerifyStatus {
        self.status
    }

    /// Applies a result; ignored once terminal. Returns whether it applied.
    pub fn resolve(&mut self, outcome: VerifyStatus) -> bool {
        if self.status.is_terminal() || !outcome.is_terminal() {
            return false;
        }
        self.status = outcome;
        true
    }
}

/// Submits `token` once per tab and classifies the answer.
pub async fn verify_token<B: Backend>(
    backend: &B,
    ledger: &OnceRegistry,
    token: &str,
) -> VerifyStatus {
    if !ledger.claim(token) {
        log::debug!("verification token already submitted in this tab");
        return VerifyStatus::Error;
    }
    match backend.verify_email(token).await {
        Ok(response) if response.success != Some(false) => VerifyStatus::Success,
        Ok(_) => VerifyStatus::Error,
        Err(e) if e.is_expired() => VerifyStatus::Expired,
        Err(e @ ApiError::Network(_)) => {
            log::warn!("email verification did not reach the server: {e}");
            ledger.release(token);
            VerifyStatus::Error
        }
        Err(e) => {
            log::warn!("email verification failed: {e}");
            VerifyStatus::Error
        }
    }
}
