use super::*;
use crate::net::error::ApiError;
use crate::test_support::{Call, FakeBackend, block_on};

fn filled() -> SignupForm {
    SignupForm {
        name: "  Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

#[test]
fn missing_fields_block_submission() {
    let backend = FakeBackend::default();
    let outcome = block_on(submit_signup(&backend, &SignupForm::default()));
    assert_eq!(
        outcome,
        Outcome::Invalid(SignupErrors {
            name: Some("Name is required".to_owned()),
            email: Some("Email is required".to_owned()),
            password: Some("Password is required".to_owned()),
            confirm_password: Some("Please confirm your password".to_owned()),
        })
    );
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn short_name_and_mismatch_are_reported() {
    let backend = FakeBackend::default();
    let form = SignupForm {
        name: " A ".to_owned(),
        confirm_password: "secret2".to_owned(),
        ..filled()
    };
    let Outcome::Invalid(errors) = block_on(submit_signup(&backend, &form)) else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.name.as_deref(), Some("Name must be at least 2 characters"));
    assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match"));
    assert_eq!(errors.email, None);
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn valid_form_registers_with_trimmed_name() {
    let backend = FakeBackend {
        register: Ok(RegisterResponse {
            message: "Check your email".to_owned(),
            user: None,
        }),
        ..FakeBackend::default()
    };
    let outcome = block_on(submit_signup(&backend, &filled()));
    assert!(outcome.is_completed());
    assert_eq!(
        backend.calls(),
        vec![Call::Register(RegisterRequest {
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
            name: "Ada Lovelace".to_owned(),
        })]
    );
}

#[test]
fn duplicate_account_message_is_shown() {
    let backend = FakeBackend {
        register: Err(ApiError::Rejected {
            status: 409,
            message: "Email already registered".to_owned(),
        }),
        ..FakeBackend::default()
    };
    assert_eq!(
        block_on(submit_signup(&backend, &filled())),
        Outcome::Failed("Email already registered".to_owned())
    );
}
