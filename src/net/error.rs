//! API failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Transport, HTTP and decode failures all end up here so forms can reduce
//! them to one general message without ever panicking. Validation errors never
//! reach this type; they are field-scoped and stay in `forms`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown for any transport-level failure.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Longest server message surfaced to the UI.
const MAX_MESSAGE_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's text or the endpoint fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// Browser APIs are missing (native builds and tests).
    #[error("not available outside the browser")]
    Unavailable,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Builds a rejection from a raw error body.
    ///
    /// The body's `message`, then `error`, is used verbatim; otherwise the
    /// endpoint-specific `fallback`.
    pub fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        Self::Rejected {
            status,
            message: rejection_message(body, fallback),
        }
    }

    /// Single human-readable line for a form's general error slot.
    pub fn general_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Network(_) => NETWORK_ERROR.to_owned(),
            _ => fallback.to_owned(),
        }
    }

    /// True when the server reported an expired single-use token.
    pub fn is_expired(&self) -> bool {
        match self {
            Self::Rejected { status, message } => {
                *status == 410 || message.to_ascii_lowercase().contains("expired")
            }
            _ => false,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn rejection_message(body: &str, fallback: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        ["message", "error"].iter().find_map(|key| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
        })
    });
    match message {
        Some(text) => text.chars().take(MAX_MESSAGE_CHARS).collect(),
        None => fallback.to_owned(),
    }
}
