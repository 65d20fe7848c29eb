//! Pricing page: available plans, the user's current plan and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plans load on mount. Once the profile refresh yields a Stripe customer id,
//! the user's subscriptions load to mark the current plan. Choosing a plan
//! either sends a signed-out visitor to login or redirects to Stripe checkout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::FormAlert;
use crate::components::plan_card::PlanCard;
use crate::net::api::HttpBackend;
use crate::state::auth::AuthState;
use crate::state::billing::{
    CHECKOUT_FAILED, CheckoutPlan, LOAD_PLANS_FAILED, Loadable, current_plan_id, fetch_plans,
    fetch_subscriptions, plan_checkout, start_checkout,
};
use crate::util::liveness::Liveness;
use crate::util::nav::{Destination, go};

#[component]
pub fn PricingPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = StoredValue::new_local(use_navigate());
    let alive = Liveness::scoped();

    let plans = RwSignal::new(Loadable::Loading);
    let current = RwSignal::new(None::<String>);
    let checkout_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    {
        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = Loadable::from_result(fetch_plans(&backend).await, LOAD_PLANS_FAILED);
            alive.apply(|| plans.set(loaded));
        });
    }

    let customer_id = Memo::new(move |_| {
        auth.with(|a| a.user().and_then(|u| u.stripe_customer_id.clone()))
    });
    {
        let backend = backend.clone();
        let alive = alive.clone();
        Effect::new(move || {
            let Some(customer_id) = customer_id.get() else {
                current.set(None);
                return;
            };
            let backend = backend.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                match fetch_subscriptions(&backend, &customer_id).await {
                    Ok(listed) => {
                        alive.apply(|| current.set(current_plan_id(&listed)));
                    }
                    Err(e) => log::warn!("could not load current plan: {e}"),
                }
            });
        });
    }

    let on_select = Callback::new(move |price_id: String| {
        if busy.get_untracked() {
            return;
        }
        checkout_error.set(None);
        let request = match auth.with_untracked(|a| plan_checkout(a.session.as_ref(), &price_id)) {
            CheckoutPlan::Login => {
                navigate.with_value(|nav| go(nav, &Destination::Login));
                return;
            }
            CheckoutPlan::Checkout(request) => request,
        };
        busy.set(true);
        let backend = backend.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            match start_checkout(&backend, &request).await {
                // Full-page navigation; the app resumes on the success route.
                Ok(destination) => {
                    alive.apply(|| navigate.with_value(|nav| go(nav, &destination)));
                }
                Err(e) => {
                    alive.apply(|| {
                        busy.set(false);
                        checkout_error.set(Some(e.general_message(CHECKOUT_FAILED)));
                    });
                }
            }
        });
    });

    view! {
        <section class="page pricing">
            <h1>"Choose Your Plan"</h1>
            <p class="pricing__lead">"Unlock every tool with a plan that fits how you work."</p>
            <FormAlert message=checkout_error/>
            {move || match plans.get() {
                Loadable::Loading => view! { <div class="spinner" aria-busy="true"></div> }.into_any(),
                Loadable::Failed(message) => view! { <div class="form-alert">{message}</div> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => {
                    view! { <p class="pricing__empty">"No plans are available right now."</p> }.into_any()
                }
                Loadable::Ready(list) => {
                    view! {
                        <div class="pricing__grid">
                            {list
                                .into_iter()
                                .map(|plan| {
                                    let id = plan.id.clone();
                                    let is_current = Signal::derive(move || {
                                        current.with(|c| c.as_deref() == Some(id.as_str()))
                                    });
                                    view! {
                                        <PlanCard plan=plan current=is_current busy=busy on_select=on_select/>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
