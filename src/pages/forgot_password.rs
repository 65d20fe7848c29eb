//! Forgot-password page: request a reset link, then confirm where it went.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::alert::{FieldError, FormAlert};
use crate::forms::Outcome;
use crate::forms::forgot_password::{ForgotPasswordForm, submit_forgot_password};
use crate::net::api::HttpBackend;
use crate::util::liveness::Liveness;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let alive = Liveness::scoped();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let general = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ForgotPasswordForm {
            email: email.get_untracked(),
        };
        email_error.set(None);
        general.set(None);
        busy.set(true);

        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_forgot_password(&backend, &form).await;
            alive.apply(|| {
                busy.set(false);
                match outcome {
                    Outcome::Invalid(errors) => email_error.set(Some(errors.email)),
                    Outcome::Failed(message) => general.set(Some(message)),
                    Outcome::Completed(address) => sent_to.set(Some(address)),
                }
            });
        });
    };

    let form_view = move || {
        view! {
            <h1 class="auth-card__title">"Reset Password"</h1>
            <p class="auth-card__lead">
                "Enter your email address and we'll send you instructions to reset your password."
            </p>
            <FormAlert message=general/>
            <form class="auth-form" on:submit=on_submit.clone() novalidate>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    inputmode="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    disabled=move || busy.get()
                    aria-describedby="email-error"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <FieldError id="email-error" message=email_error/>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                </button>
            </form>
            <p class="auth-card__footer">
                <a href="/login">"Back to Sign In"</a>
            </p>
        }
    };

    view! {
        <section class="page page--narrow auth-card">
            <Show when=move || sent_to.with(Option::is_some) fallback=form_view>
                <h1 class="auth-card__title">"Check your email"</h1>
                <p>
                    "We've sent password reset instructions to "
                    <strong>{move || sent_to.get().unwrap_or_default()}</strong>
                </p>
                <button class="btn btn--secondary" on:click=move |_| sent_to.set(None)>
                    "Try another email"
                </button>
                <a href="/login" class="auth-card__link">"Back to Sign In"</a>
            </Show>
        </section>
    }
}
