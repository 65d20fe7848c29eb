//! Reset-password page, reached from the emailed `?token=` link.
//!
//! Without a token the form shows a general error and submit stays disabled.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::alert::{FieldError, FormAlert};
use crate::forms::Outcome;
use crate::forms::reset_password::{
    INVALID_RESET_TOKEN, ResetPasswordErrors, ResetPasswordForm, reset_token,
    submit_reset_password,
};
use crate::net::api::HttpBackend;
use crate::util::liveness::Liveness;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let alive = Liveness::scoped();
    let query = use_query_map();
    let token = reset_token(query.with_untracked(|q| q.get("token")));
    let has_token = token.is_some();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(ResetPasswordErrors::default());
    let general = RwSignal::new((!has_token).then(|| INVALID_RESET_TOKEN.to_owned()));
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        errors.set(ResetPasswordErrors::default());
        busy.set(true);

        let backend = backend.clone();
        let alive = alive.clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_reset_password(&backend, token.as_deref(), &form).await;
            alive.apply(|| {
                busy.set(false);
                match outcome {
                    Outcome::Invalid(field_errors) => {
                        if let Some(message) = field_errors.general.clone() {
                            general.set(Some(message));
                        }
                        errors.set(field_errors);
                    }
                    Outcome::Failed(message) => general.set(Some(message)),
                    Outcome::Completed(()) => done.set(true),
                }
            });
        });
    };

    let password_error = Signal::derive(move || errors.with(|e| e.password.clone()));
    let confirm_error = Signal::derive(move || errors.with(|e| e.confirm_password.clone()));

    let form_view = move || {
        view! {
            <h1 class="auth-card__title">"Set a New Password"</h1>
            <FormAlert message=general/>
            <form class="auth-form" on:submit=on_submit.clone() novalidate>
                <label for="password">"New Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="At least 8 characters"
                    disabled=move || busy.get() || !has_token
                    aria-describedby="password-error"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <FieldError id="password-error" message=password_error/>

                <label for="confirm-password">"Confirm Password"</label>
                <input
                    id="confirm-password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Repeat new password"
                    disabled=move || busy.get() || !has_token
                    aria-describedby="confirm-password-error"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <FieldError id="confirm-password-error" message=confirm_error/>

                <button
                    class="btn btn--primary auth-form__submit"
                    type="submit"
                    disabled=move || busy.get() || !has_token
                >
                    {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>
            <p class="auth-card__footer">
                <a href="/forgot-password">"Request a new link"</a>
            </p>
        }
    };

    view! {
        <section class="page page--narrow auth-card">
            <Show when=move || done.get() fallback=form_view>
                <h1 class="auth-card__title">"Password Reset Successful"</h1>
                <p>
                    "Your password has been successfully reset. You can now sign in with your new password."
                </p>
                <a href="/login" class="btn btn--primary">"Go to Sign In"</a>
            </Show>
        </section>
    }
}
