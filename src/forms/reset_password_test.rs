use super::*;
use crate::net::error::ApiError;
use crate::test_support::{Call, FakeBackend, block_on};

fn form(password: &str, confirm: &str) -> ResetPasswordForm {
    ResetPasswordForm {
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn reset_token_requires_non_blank_value() {
    assert_eq!(reset_token(None), None);
    assert_eq!(reset_token(Some(" ".to_owned())), None);
    assert_eq!(reset_token(Some("rt-1".to_owned())).as_deref(), Some("rt-1"));
}

#[test]
fn missing_token_is_a_general_error_without_network() {
    let backend = FakeBackend::default();
    let outcome = block_on(submit_reset_password(&backend, None, &form("longenough", "longenough")));
    assert_eq!(
        outcome,
        Outcome::Invalid(ResetPasswordErrors {
            general: Some(INVALID_RESET_TOKEN.to_owned()),
            ..ResetPasswordErrors::default()
        })
    );
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn reset_requires_eight_characters() {
    let backend = FakeBackend::default();
    let outcome = block_on(submit_reset_password(&backend, Some("rt-1"), &form("1234567", "1234567")));
    assert_eq!(
        outcome,
        Outcome::Invalid(ResetPasswordErrors {
            password: Some("Password must be at least 8 characters".to_owned()),
            ..ResetPasswordErrors::default()
        })
    );
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn valid_reset_sends_token_and_password() {
    let backend = FakeBackend::default();
    let outcome = block_on(submit_reset_password(&backend, Some("rt-1"), &form("newpassword", "newpassword")));
    assert_eq!(outcome, Outcome::Completed(()));
    assert_eq!(
        backend.calls(),
        vec![Call::ResetPassword(ResetPasswordRequest {
            token: "rt-1".to_owned(),
            password: "newpassword".to_owned(),
        })]
    );
}

#[test]
fn rejected_reset_uses_server_message() {
    let backend = FakeBackend {
        message: Err(ApiError::Rejected {
            status: 400,
            message: "Reset link has expired".to_owned(),
        }),
        ..FakeBackend::default()
    };
    assert_eq!(
        block_on(submit_reset_password(&backend, Some("rt-1"), &form("newpassword", "newpassword"))),
        Outcome::Failed("Reset link has expired".to_owned())
    );
}
