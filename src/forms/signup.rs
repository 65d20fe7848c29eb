//! Signup form. Success sends a verification email and writes no session.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::{Outcome, note};
use crate::net::api::Backend;
use crate::net::types::{RegisterRequest, RegisterResponse};
use crate::util::validate::{
    MIN_PASSWORD_LEN, validate_confirmation, validate_email, validate_name, validate_password,
};

pub const SIGNUP_FAILED: &str = "Registration failed. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, SignupErrors> {
        let mut errors = SignupErrors::default();
        note(&mut errors.name, validate_name(&self.name));
        note(&mut errors.email, validate_email(&self.email));
        note(
            &mut errors.password,
            validate_password(&self.password, MIN_PASSWORD_LEN),
        );
        note(
            &mut errors.confirm_password,
            validate_confirmation(&self.password, &self.confirm_password),
        );
        if errors != SignupErrors::default() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.trim().to_owned(),
        })
    }
}

pub async fn submit_signup<B: Backend>(
    backend: &B,
    form: &SignupForm,
) -> Outcome<SignupErrors, RegisterResponse> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return Outcome::Invalid(errors),
    };
    match backend.register(&request).await {
        Ok(response) => {
            log::info!("account registered, awaiting email verification");
            Outcome::Completed(response)
        }
        Err(e) => Outcome::Failed(e.general_message(SIGNUP_FAILED)),
    }
}
