//! Email verification page, reached from the `?token=` link in the signup
//! email.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits the token once per tab through the verification ledger and renders
//! the terminal state. Error and Expired offer a resend form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::TabRegistries;
use crate::components::alert::FieldError;
use crate::forms::Outcome;
use crate::forms::resend::submit_resend;
use crate::net::api::HttpBackend;
use crate::state::verify::{VerifyFlow, VerifyStatus, verify_token};
use crate::util::liveness::Liveness;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let registries = expect_context::<TabRegistries>();
    let alive = Liveness::scoped();
    let query = use_query_map();

    let flow = RwSignal::new(VerifyFlow::new(query.with_untracked(|q| q.get("token"))));

    if let Some(token) = flow.with_untracked(|f| f.token().map(str::to_owned)) {
        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let status = verify_token(&backend, &registries.verified_tokens, &token).await;
            log::debug!("email verification resolved: {status:?}");
            alive.apply(|| {
                flow.update(|f| {
                    f.resolve(status);
                });
            });
        });
    }

    let status = move || flow.with(VerifyFlow::status);

    view! {
        <section class="page page--narrow auth-card verify-card">
            <h1 class="auth-card__title">{move || status().title()}</h1>
            <p class="verify-card__description">{move || status().description()}</p>
            {move || match status() {
                VerifyStatus::Loading => view! { <div class="spinner" aria-busy="true"></div> }.into_any(),
                VerifyStatus::Success => {
                    view! { <a href="/login" class="btn btn--primary">"Sign In"</a> }.into_any()
                }
                VerifyStatus::Error | VerifyStatus::Expired => {
                    view! {
                        <ResendVerification backend=backend.clone() alive=alive.clone()/>
                        <a href="/login" class="auth-card__link">"Back to Sign In"</a>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

/// Email form asking for a fresh verification link.
#[component]
fn ResendVerification(backend: HttpBackend, alive: Liveness) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        email_error.set(None);
        notice.set(None);
        busy.set(true);

        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_resend(&backend, &address).await;
            alive.apply(|| {
                busy.set(false);
                match outcome {
                    Outcome::Invalid(message) => email_error.set(Some(message)),
                    Outcome::Failed(message) => notice.set(Some((false, message))),
                    Outcome::Completed(message) => notice.set(Some((true, message))),
                }
            });
        });
    };

    view! {
        <form class="auth-form resend-form" on:submit=on_submit novalidate>
            <label for="resend-email">"Email"</label>
            <input
                id="resend-email"
                type="email"
                inputmode="email"
                autocomplete="email"
                placeholder="you@example.com"
                disabled=move || busy.get()
                aria-describedby="resend-email-error"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <FieldError id="resend-email-error" message=email_error/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Resend Verification Email" }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|(ok, message)| {
                        let class = if ok { "form-notice form-notice--ok" } else { "form-alert" };
                        view! { <p class=class role="status">{message}</p> }
                    })
            }}
        </form>
    }
}
