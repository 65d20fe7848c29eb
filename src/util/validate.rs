//! Pure field validators shared by every auth form.
//!
//! Each returns `Ok(())` or the message shown under the field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length for login and signup.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum password length when setting a new password via reset link.
pub const MIN_RESET_PASSWORD_LEN: usize = 8;
/// Minimum trimmed display-name length for signup.
pub const MIN_NAME_LEN: usize = 2;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const NAME_REQUIRED: &str = "Name is required";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub type FieldResult = Result<(), String>;

/// Shape check only; deliverability is the server's problem.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_email(value: &str) -> FieldResult {
    if value.is_empty() {
        Err(EMAIL_REQUIRED.to_owned())
    } else if !is_valid_email(value) {
        Err(EMAIL_INVALID.to_owned())
    } else {
        Ok(())
    }
}

/// Length is counted in characters, not bytes.
pub fn validate_password(value: &str, min_len: usize) -> FieldResult {
    if value.is_empty() {
        Err(PASSWORD_REQUIRED.to_owned())
    } else if value.chars().count() < min_len {
        Err(format!("Password must be at least {min_len} characters"))
    } else {
        Ok(())
    }
}

pub fn validate_confirmation(password: &str, confirm: &str) -> FieldResult {
    if confirm.is_empty() {
        Err(CONFIRM_REQUIRED.to_owned())
    } else if password != confirm {
        Err(PASSWORD_MISMATCH.to_owned())
    } else {
        Ok(())
    }
}

pub fn validate_name(value: &str) -> FieldResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(NAME_REQUIRED.to_owned())
    } else if trimmed.chars().count() < MIN_NAME_LEN {
        Err(format!("Name must be at least {MIN_NAME_LEN} characters"))
    } else {
        Ok(())
    }
}
