//! Login form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{Outcome, note};
use crate::net::api::Backend;
use crate::net::types::LoginRequest;
use crate::state::session::{Session, SessionStore};
use crate::util::validate::{MIN_PASSWORD_LEN, validate_email, validate_password};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, LoginErrors> {
        let mut errors = LoginErrors::default();
        note(&mut errors.email, validate_email(&self.email));
        note(
            &mut errors.password,
            validate_password(&self.password, MIN_PASSWORD_LEN),
        );
        if errors == LoginErrors::default() {
            Ok(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Validates, logs in and persists the returned session.
///
/// A 2xx answer without a token is a failed login.
pub async fn submit_login<B, S>(
    backend: &B,
    store: &S,
    form: &LoginForm,
) -> Outcome<LoginErrors, Session>
where
    B: Backend,
    S: SessionStore,
{
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return Outcome::Invalid(errors),
    };
    match backend.login(&request).await {
        Ok(response) => match response.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                let session = Session::new(token, response.user);
                store.save(&session);
                log::info!("login succeeded");
                Outcome::Completed(session)
            }
            None => {
                log::warn!("login response carried no token");
                let message = response.message.trim();
                Outcome::Failed(if message.is_empty() {
                    LOGIN_FAILED.to_owned()
                } else {
                    message.to_owned()
                })
            }
        },
        Err(e) => Outcome::Failed(e.general_message(LOGIN_FAILED)),
    }
}
