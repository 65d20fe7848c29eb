//! Resend-verification form shown after a failed or expired email link.

#[cfg(test)]
#[path = "resend_test.rs"]
mod resend_test;

use super::Outcome;
use crate::net::api::Backend;
use crate::util::validate::validate_email;

pub const RESEND_FAILED: &str = "Resend failed";
pub const RESEND_SENT: &str = "A new verification link is on its way.";

/// Validates `email` and asks for a fresh verification link.
///
/// Completes with the server's acknowledgement, or `RESEND_SENT` when it
/// sent none.
pub async fn submit_resend<B: Backend>(backend: &B, email: &str) -> Outcome<String, String> {
    let email = email.trim();
    if let Err(message) = validate_email(email) {
        return Outcome::Invalid(message);
    }
    match backend.resend_verification(email).await {
        Ok(response) if response.success == Some(false) => Outcome::Failed(
            Some(response.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| RESEND_FAILED.to_owned()),
        ),
        Ok(response) => Outcome::Completed(
            Some(response.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| RESEND_SENT.to_owned()),
        ),
        Err(e) => Outcome::Failed(e.general_message(RESEND_FAILED)),
    }
}
