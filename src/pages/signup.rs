//! Signup page. A successful registration shows a "check your email" card.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::alert::{FieldError, FormAlert};
use crate::forms::Outcome;
use crate::forms::signup::{SignupErrors, SignupForm, submit_signup};
use crate::net::api::HttpBackend;
use crate::util::liveness::Liveness;

#[component]
pub fn SignupPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let alive = Liveness::scoped();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(SignupErrors::default());
    let general = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        errors.set(SignupErrors::default());
        general.set(None);
        busy.set(true);

        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_signup(&backend, &form).await;
            alive.apply(|| {
                busy.set(false);
                match outcome {
                    Outcome::Invalid(field_errors) => errors.set(field_errors),
                    Outcome::Failed(message) => general.set(Some(message)),
                    Outcome::Completed(_) => registered.set(Some(form.email)),
                }
            });
        });
    };

    let field = move |pick: fn(&SignupErrors) -> Option<String>| {
        Signal::derive(move || errors.with(pick))
    };

    let form_view = move || {
        view! {
            <h1 class="auth-card__title">"Create Account"</h1>
            <FormAlert message=general/>
            <form class="auth-form" on:submit=on_submit.clone() novalidate>
                <label for="name">"Full Name"</label>
                <input
                    id="name"
                    type="text"
                    autocomplete="name"
                    placeholder="Jane Doe"
                    disabled=move || busy.get()
                    aria-describedby="name-error"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <FieldError id="name-error" message=field(|e| e.name.clone())/>

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
                <FieldError id="email-error" message=field(|e| e.email.clone())/>

                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="At least 6 characters"
                    disabled=move || busy.get()
                    aria-describedby="password-error"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <FieldError id="password-error" message=field(|e| e.password.clone())/>

                <label for="confirm-password">"Confirm Password"</label>
                <input
                    id="confirm-password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Repeat password"
                    disabled=move || busy.get()
                    aria-describedby="confirm-password-error"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <FieldError id="confirm-password-error" message=field(|e| e.confirm_password.clone())/>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <p class="auth-card__footer">
                "Already have an account? " <a href="/login">"Sign in"</a>
            </p>
        }
    };

    view! {
        <section class="page page--narrow auth-card">
            <Show when=move || registered.with(Option::is_some) fallback=form_view>
                <h1 class="auth-card__title">"Check your email"</h1>
                <p>
                    "We've sent a verification link to "
                    <strong>{move || registered.get().unwrap_or_default()}</strong>
                    ". Follow it to activate your account."
                </p>
                <a href="/login" class="btn btn--primary">"Go to Sign In"</a>
            </Show>
        </section>
    }
}
