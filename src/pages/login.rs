//! Login page: email + password sign-in.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{FieldError, FormAlert};
use crate::forms::Outcome;
use crate::forms::login::{LoginErrors, LoginForm, submit_login};
use crate::net::api::HttpBackend;
use crate::state::auth::AuthState;
use crate::state::session::BrowserSessionStore;
use crate::util::liveness::Liveness;
use crate::util::nav::{Destination, go};

#[component]
pub fn LoginPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let alive = Liveness::scoped();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(LoginErrors::default());
    let general = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        errors.set(LoginErrors::default());
        general.set(None);
        busy.set(true);

        let backend = backend.clone();
        let navigate = navigate.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_login(&backend, &BrowserSessionStore, &form).await;
            alive.apply(|| {
                busy.set(false);
                match outcome {
                    Outcome::Invalid(field_errors) => errors.set(field_errors),
                    Outcome::Failed(message) => general.set(Some(message)),
                    Outcome::Completed(session) => {
                        auth.set(AuthState::signed_in(session));
                        go(&navigate, &Destination::Home);
                    }
                }
            });
        });
    };

    let email_error = Signal::derive(move || errors.with(|e| e.email.clone()));
    let password_error = Signal::derive(move || errors.with(|e| e.password.clone()));

    view! {
        <section class="page page--narrow auth-card">
            <h1 class="auth-card__title">"Welcome Back"</h1>
            <FormAlert message=general/>
            <form class="auth-form" on:submit=on_submit novalidate>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    inputmode="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    disabled=move || busy.get()
                    aria-invalid=move || if email_error.with(Option::is_some) { "true" } else { "false" }
                    aria-describedby="email-error"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <FieldError id="email-error" message=email_error/>

                <div class="auth-form__row">
                    <label for="password">"Password"</label>
                    <a href="/forgot-password" class="auth-form__link">"Forgot?"</a>
                </div>
                <div class="auth-form__password">
                    <input
                        id="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        autocomplete="current-password"
                        placeholder="Enter password"
                        disabled=move || busy.get()
                        aria-invalid=move || if password_error.with(Option::is_some) { "true" } else { "false" }
                        aria-describedby="password-error"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="auth-form__reveal"
                        disabled=move || busy.get()
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <FieldError id="password-error" message=password_error/>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <p class="auth-card__footer">
                "Don't have an account? " <a href="/signup">"Sign up"</a>
            </p>
        </section>
    }
}
