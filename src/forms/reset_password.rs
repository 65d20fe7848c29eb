//! Reset-password form, gated by the token from the emailed link.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use super::{Outcome, note};
use crate::net::api::Backend;
use crate::net::types::ResetPasswordRequest;
use crate::util::validate::{MIN_RESET_PASSWORD_LEN, validate_confirmation, validate_password};

pub const INVALID_RESET_TOKEN: &str = "Invalid reset token. Please request a new password reset.";
pub const RESET_FAILED: &str = "Failed to reset password";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordErrors {
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    /// Set when the page URL carries no usable token.
    pub general: Option<String>,
}

/// Token gate: the page shows `INVALID_RESET_TOKEN` and disables submit on `None`.
pub fn reset_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

impl ResetPasswordForm {
    pub fn validate(&self, token: Option<&str>) -> Result<ResetPasswordRequest, ResetPasswordErrors> {
        let mut errors = ResetPasswordErrors::default();
        note(
            &mut errors.password,
            validate_password(&self.password, MIN_RESET_PASSWORD_LEN),
        );
        note(
            &mut errors.confirm_password,
            validate_confirmation(&self.password, &self.confirm_password),
        );
        if errors.password.is_some() || errors.confirm_password.is_some() {
            return Err(errors);
        }
        match token {
            Some(token) => Ok(ResetPasswordRequest {
                token: token.to_owned(),
                password: self.password.clone(),
            }),
            None => Err(ResetPasswordErrors {
                general: Some(INVALID_RESET_TOKEN.to_owned()),
                ..errors
            }),
        }
    }
}

pub async fn submit_reset_password<B: Backend>(
    backend: &B,
    token: Option<&str>,
    form: &ResetPasswordForm,
) -> Outcome<ResetPasswordErrors, ()> {
    let request = match form.validate(token) {
        Ok(request) => request,
        Err(errors) => return Outcome::Invalid(errors),
    };
    match backend.reset_password(&request).await {
        Ok(_) => {
            log::info!("password reset completed");
            Outcome::Completed(())
        }
        Err(e) => Outcome::Failed(e.general_message(RESET_FAILED)),
    }
}
