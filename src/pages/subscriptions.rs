//! Subscription list for the signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::subscription_card::SubscriptionCard;
use crate::net::api::HttpBackend;
use crate::state::auth::AuthState;
use crate::state::billing::{LOAD_SUBSCRIPTIONS_FAILED, Loadable, fetch_subscriptions};
use crate::util::auth::install_unauth_redirect;
use crate::util::liveness::Liveness;

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let alive = Liveness::scoped();
    install_unauth_redirect(auth, use_navigate());

    let subscriptions = RwSignal::new(Loadable::Loading);

    // `None` while the profile is still refreshing.
    let customer = Memo::new(move |_| {
        auth.with(|a| {
            if a.refreshing {
                None
            } else {
                Some(a.user().and_then(|u| u.stripe_customer_id.clone()))
            }
        })
    });

    Effect::new(move || {
        let Some(customer) = customer.get() else {
            return;
        };
        let Some(customer_id) = customer else {
            subscriptions.set(Loadable::Ready(Vec::new()));
            return;
        };
        subscriptions.set(Loadable::Loading);
        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = Loadable::from_result(
                fetch_subscriptions(&backend, &customer_id).await,
                LOAD_SUBSCRIPTIONS_FAILED,
            );
            alive.apply(|| subscriptions.set(loaded));
        });
    });

    view! {
        <section class="page subscriptions">
            <h1>"My Subscriptions"</h1>
            {move || match subscriptions.get() {
                Loadable::Loading => view! { <div class="spinner" aria-busy="true"></div> }.into_any(),
                Loadable::Failed(message) => view! { <div class="form-alert">{message}</div> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => {
                    view! {
                        <div class="subscriptions__empty">
                            <p>"No active subscriptions found"</p>
                            <a href="/pricing" class="btn btn--primary">"View Plans"</a>
                        </div>
                    }
                    .into_any()
                }
                Loadable::Ready(list) => {
                    view! {
                        <div class="subscriptions__grid">
                            {list
                                .into_iter()
                                .map(|subscription| view! { <SubscriptionCard subscription=subscription/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
