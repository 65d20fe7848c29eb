//! Forgot-password form: requests a reset link by email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use super::Outcome;
use crate::net::api::Backend;
use crate::util::validate::validate_email;

pub const FORGOT_FAILED: &str = "Failed to send reset link. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

/// Field error for the email input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForgotPasswordErrors {
    pub email: String,
}

/// Completes with the address the link was sent to.
pub async fn submit_forgot_password<B: Backend>(
    backend: &B,
    form: &ForgotPasswordForm,
) -> Outcome<ForgotPasswordErrors, String> {
    let email = form.email.trim();
    if let Err(message) = validate_email(email) {
        return Outcome::Invalid(ForgotPasswordErrors { email: message });
    }
    match backend.request_password_reset(email).await {
        Ok(_) => Outcome::Completed(email.to_owned()),
        Err(e) => Outcome::Failed(e.general_message(FORGOT_FAILED)),
    }
}
