//! Return page after Stripe checkout (`/subscriptions/success?session_id=`).

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::TabRegistries;
use crate::net::api::HttpBackend;
use crate::state::billing::{ReconcileState, reconcile_session, reconcile_start};
use crate::util::liveness::Liveness;
use crate::util::nav::non_empty;

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let registries = expect_context::<TabRegistries>();
    let alive = Liveness::scoped();
    let query = use_query_map();

    let session_id = non_empty(query.with_untracked(|q| q.get("session_id")));
    let state = RwSignal::new(reconcile_start(session_id.as_deref()));

    if session_id.is_some() {
        leptos::task::spawn_local(async move {
            let reconciled =
                reconcile_session(&backend, &registries.reconciled_sessions, session_id.as_deref())
                    .await;
            alive.apply(|| state.set(reconciled));
        });
    }

    view! {
        <section class="page page--narrow checkout-success">
            <h1>"Payment Successful!"</h1>
            <p>"Thank you for subscribing. Your plan is now active."</p>
            {move || match state.get() {
                ReconcileState::Loading => {
                    view! { <div class="spinner" aria-busy="true"></div> }.into_any()
                }
                ReconcileState::Loaded(session) => {
                    view! {
                        <dl class="checkout-success__details">
                            <dt>"Subscription ID"</dt>
                            <dd>{session.stripe_subscription_id.unwrap_or_else(|| "-".to_owned())}</dd>
                            <dt>"Customer ID"</dt>
                            <dd>{session.stripe_customer_id.unwrap_or_else(|| "-".to_owned())}</dd>
                        </dl>
                    }
                    .into_any()
                }
                ReconcileState::Failed(message) => {
                    view! { <div class="form-alert">{message}</div> }.into_any()
                }
                ReconcileState::NoSession | ReconcileState::AlreadyReconciled => ().into_any(),
            }}
            <div class="checkout-success__actions">
                <a href="/subscriptions" class="btn btn--primary">"View Subscriptions"</a>
                <a href="/" class="btn btn--secondary">"Back to Home"</a>
            </div>
        </section>
    }
}
