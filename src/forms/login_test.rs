use super::*;
use crate::net::error::ApiError;
use crate::net::types::LoginResponse;
use crate::state::session::{AUTH_TOKEN_KEY, MemorySessionStore};
use crate::test_support::{Call, FakeBackend, block_on, sample_user};

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[test]
fn empty_form_reports_both_fields_without_network() {
    let backend = FakeBackend::default();
    let store = MemorySessionStore::new();
    let outcome = block_on(submit_login(&backend, &store, &LoginForm::default()));
    assert_eq!(
        outcome,
        Outcome::Invalid(LoginErrors {
            email: Some("Email is required".to_owned()),
            password: Some("Password is required".to_owned()),
        })
    );
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn malformed_email_and_short_password_are_rejected_locally() {
    let backend = FakeBackend::default();
    let outcome = block_on(submit_login(
        &backend,
        &MemorySessionStore::new(),
        &form("ada@example", "12345"),
    ));
    assert_eq!(
        outcome,
        Outcome::Invalid(LoginErrors {
            email: Some("Please enter a valid email address".to_owned()),
            password: Some("Password must be at least 6 characters".to_owned()),
        })
    );
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn success_stores_the_exact_token() {
    let backend = FakeBackend {
        login: Ok(LoginResponse {
            message: "Login successful".to_owned(),
            token: Some("jwt.abc.def".to_owned()),
            user: Some(sample_user()),
        }),
        ..FakeBackend::default()
    };
    let store = MemorySessionStore::new();

    let outcome = block_on(submit_login(&backend, &store, &form("ada@example.com", "secret1")));

    let expected = Session::new("jwt.abc.def", Some(sample_user()));
    assert_eq!(outcome, Outcome::Completed(expected.clone()));
    assert_eq!(store.raw(AUTH_TOKEN_KEY).as_deref(), Some("jwt.abc.def"));
    assert_eq!(store.load(), Some(expected));
    assert_eq!(
        backend.calls(),
        vec![Call::Login(LoginRequest {
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
        })]
    );
}

#[test]
fn response_without_token_fails_and_stores_nothing() {
    let backend = FakeBackend {
        login: Ok(LoginResponse {
            message: "Please verify your email first".to_owned(),
            token: None,
            user: None,
        }),
        ..FakeBackend::default()
    };
    let store = MemorySessionStore::new();
    let outcome = block_on(submit_login(&backend, &store, &form("ada@example.com", "secret1")));
    assert_eq!(outcome, Outcome::Failed("Please verify your email first".to_owned()));
    assert_eq!(store.load(), None);
}

#[test]
fn rejection_surfaces_server_message() {
    let backend = FakeBackend {
        login: Err(ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_owned(),
        }),
        ..FakeBackend::default()
    };
    let store = MemorySessionStore::new();
    let outcome = block_on(submit_login(&backend, &store, &form("ada@example.com", "secret1")));
    assert_eq!(outcome, Outcome::Failed("Invalid credentials".to_owned()));
    assert_eq!(store.load(), None);
}

#[test]
fn undecodable_body_uses_form_fallback() {
    let backend = FakeBackend {
        login: Err(ApiError::Decode("eof".to_owned())),
        ..FakeBackend::default()
    };
    let outcome = block_on(submit_login(
        &backend,
        &MemorySessionStore::new(),
        &form("ada@example.com", "secret1"),
    ));
    assert_eq!(outcome, Outcome::Failed(LOGIN_FAILED.to_owned()));
}
