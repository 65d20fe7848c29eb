//! Pricing plan card.

use leptos::prelude::*;

use crate::state::billing::Plan;

#[component]
pub fn PlanCard(
    plan: Plan,
    /// The signed-in user is already subscribed to this price.
    #[prop(into)]
    current: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let price_id = plan.id.clone();
    let title = plan.title().to_owned();
    let period = plan.period_label();

    view! {
        <article class="plan-card" class:plan-card--current=move || current.get()>
            <h3 class="plan-card__title">{title}</h3>
            <p class="plan-card__price">
                {plan.display_price}
                <span class="plan-card__period">{period}</span>
            </p>
            <button
                class="btn btn--primary plan-card__select"
                disabled=move || busy.get() || current.get()
                on:click=move |_| on_select.run(price_id.clone())
            >
                {move || if current.get() { "Current plan" } else { "Subscribe" }}
            </button>
        </article>
    }
}
