//! Auth form submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages collect raw field values into a form struct and call its `submit_*`
//! function. Validation runs first; only a fully valid form reaches the
//! `Backend`, and then with exactly one call.
//!
//! ERROR HANDLING
//! ==============
//! Field problems come back as `Outcome::Invalid` with per-field messages.
//! Any API failure is reduced to one general line in `Outcome::Failed`.

pub mod forgot_password;
pub mod login;
pub mod resend;
pub mod reset_password;
pub mod signup;

/// Result of submitting a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<E, T> {
    /// Local validation failed; nothing was sent.
    Invalid(E),
    /// The request was sent and failed; message for the general error slot.
    Failed(String),
    Completed(T),
}

impl<E, T> Outcome<E, T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Keeps the first error for a field.
fn note(slot: &mut Option<String>, result: Result<(), String>) {
    if let Err(message) = result {
        slot.get_or_insert(message);
    }
}
