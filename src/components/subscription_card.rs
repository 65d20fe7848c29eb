//! Subscription card and status badge for the subscriptions page.

use leptos::prelude::*;

use crate::net::types::{Subscription, SubscriptionStatus};
use crate::state::billing::{renewal_line, status_label, subscription_price};

/// Badge for listed statuses only; renders nothing for the rest.
#[component]
pub fn StatusBadge(status: SubscriptionStatus) -> impl IntoView {
    status_label(status).map(|label| {
        let class = match status {
            SubscriptionStatus::Trialing => "status-badge status-badge--trial",
            _ => "status-badge status-badge--active",
        };
        view! { <span class=class>{label}</span> }
    })
}

#[component]
pub fn SubscriptionCard(subscription: Subscription) -> impl IntoView {
    let title = subscription
        .product_name
        .clone()
        .unwrap_or_else(|| "Subscription".to_owned());
    let price = subscription_price(&subscription);
    let renewal = renewal_line(&subscription);
    let cancelling = subscription.cancel_at_period_end;

    view! {
        <article class="subscription-card">
            <header class="subscription-card__header">
                <h3 class="subscription-card__title">{title}</h3>
                <StatusBadge status=subscription.status/>
            </header>
            {price.map(|p| view! { <p class="subscription-card__price">{p}</p> })}
            {renewal.map(|r| view! { <p class="subscription-card__renewal">{r}</p> })}
            {cancelling.then(|| view! {
                <p class="subscription-card__notice">"Cancels at the end of the current period"</p>
            })}
        </article>
    }
}
