//! Subscription and checkout rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pricing, subscription list and checkout-success pages share these
//! functions. Fetches return values only; where to go next is a separate
//! `CheckoutPlan`/`Destination` value acted on by the page.
//!
//! DESIGN
//! ======
//! Only `active` and `trialing` subscriptions are shown. Active ones come
//! first, then newest creation timestamp, then id, so the order is total and
//! stable across refetches.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use std::cmp::Ordering;

use super::session::Session;
use crate::net::api::Backend;
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::{
    CheckoutRequest, CheckoutSession, Interval, Price, PriceList, PriceType, Subscription,
    SubscriptionStatus,
};
use crate::util::format::{billing_interval, format_date, format_money};
use crate::util::nav::Destination;
use crate::util::once::OnceRegistry;

pub const LOAD_SUBSCRIPTIONS_FAILED: &str = "Failed to load subscriptions";
pub const LOAD_PLANS_FAILED: &str = "Failed to load plans";
pub const CHECKOUT_FAILED: &str = "Failed to start checkout. Please try again.";
pub const SESSION_FAILED: &str = "Failed to retrieve Stripe session";

/// Page-level state of one fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: ApiResult<T>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.general_message(fallback)),
        }
    }
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

pub fn is_listed(status: SubscriptionStatus) -> bool {
    matches!(
        status,
        SubscriptionStatus::Active | SubscriptionStatus::Trialing
    )
}

fn display_order(a: &Subscription, b: &Subscription) -> Ordering {
    let a_active = a.status == SubscriptionStatus::Active;
    let b_active = b.status == SubscriptionStatus::Active;
    b_active
        .cmp(&a_active)
        .then_with(|| b.created_at().cmp(&a.created_at()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Keeps active/trialing subscriptions in display order.
pub fn filter_and_sort(subscriptions: Vec<Subscription>) -> Vec<Subscription> {
    let mut listed: Vec<Subscription> = subscriptions
        .into_iter()
        .filter(|s| is_listed(s.status))
        .collect();
    listed.sort_by(display_order);
    listed
}

/// Price id of the subscription shown first, if any.
pub fn current_plan_id(listed: &[Subscription]) -> Option<String> {
    listed.first().and_then(|s| s.price_id.clone())
}

/// Subscriptions for `customer_id`, filtered and ordered for display.
pub async fn fetch_subscriptions<B: Backend>(
    backend: &B,
    customer_id: &str,
) -> ApiResult<Vec<Subscription>> {
    let response = backend.fetch_subscription(customer_id).await?;
    Ok(filter_and_sort(response.into_all()))
}

pub fn status_label(status: SubscriptionStatus) -> Option<&'static str> {
    match status {
        SubscriptionStatus::Active => Some("Active"),
        SubscriptionStatus::Trialing => Some("Trial"),
        _ => None,
    }
}

/// "$9.99 / month" line for a subscription card.
pub fn subscription_price(sub: &Subscription) -> Option<String> {
    let amount = sub.amount?;
    let currency = sub.currency.as_deref().unwrap_or("usd");
    let money = format_money(amount, currency);
    Some(match sub.interval {
        Some(interval) => format!(
            "{money} / {}",
            billing_interval(interval, sub.interval_count.unwrap_or(1))
        ),
        None => money,
    })
}

/// "Trial ends on …" for trials, "Renews on …" for active subscriptions.
pub fn renewal_line(sub: &Subscription) -> Option<String> {
    match sub.status {
        SubscriptionStatus::Trialing => {
            format_date(sub.trial_end?).map(|d| format!("Trial ends on {d}"))
        }
        SubscriptionStatus::Active => {
            format_date(sub.current_period_end?).map(|d| format!("Renews on {d}"))
        }
        _ => None,
    }
}

// =============================================================================
// PLANS
// =============================================================================

/// A purchasable price formatted for the pricing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: String,
    pub nickname: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub interval: Option<Interval>,
    pub interval_count: u32,
    pub kind: PriceType,
    pub product_id: String,
    pub display_price: String,
}

impl Plan {
    fn from_price(price: Price) -> Self {
        let amount = price.unit_amount.unwrap_or(0);
        let display_price = format_money(amount, &price.currency);
        let (interval, interval_count) = price
            .recurring
            .map_or((None, 1), |r| (Some(r.interval), r.interval_count));
        Self {
            id: price.id,
            nickname: price.nickname,
            amount,
            currency: price.currency,
            interval,
            interval_count,
            kind: price.kind,
            product_id: price.product,
            display_price,
        }
    }

    pub fn title(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Plan")
    }

    /// "per month", "per 3 months", or "one-time".
    pub fn period_label(&self) -> String {
        match self.interval {
            Some(interval) => format!("per {}", billing_interval(interval, self.interval_count)),
            None => "one-time".to_owned(),
        }
    }
}

/// Active prices as plans, cheapest first.
pub fn plans_from(list: PriceList) -> Vec<Plan> {
    let mut plans: Vec<Plan> = list
        .data
        .into_iter()
        .filter(|p| p.active)
        .map(Plan::from_price)
        .collect();
    plans.sort_by(|a, b| a.amount.cmp(&b.amount).then_with(|| a.id.cmp(&b.id)));
    plans
}

pub async fn fetch_plans<B: Backend>(backend: &B) -> ApiResult<Vec<Plan>> {
    Ok(plans_from(backend.fetch_prices().await?))
}

// =============================================================================
// CHECKOUT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutPlan {
    /// No user is signed in; send them to login instead.
    Login,
    Checkout(CheckoutRequest),
}

/// Decides what choosing `price_id` does for the current session.
pub fn plan_checkout(session: Option<&Session>, price_id: &str) -> CheckoutPlan {
    match session.and_then(|s| s.user.as_ref()) {
        Some(user) => CheckoutPlan::Checkout(CheckoutRequest {
            price_id: price_id.to_owned(),
            user_id: user.id.clone(),
            user_email: user.email.clone(),
        }),
        None => CheckoutPlan::Login,
    }
}

/// Creates a Stripe checkout session and returns where to send the browser.
pub async fn start_checkout<B: Backend>(
    backend: &B,
    request: &CheckoutRequest,
) -> ApiResult<Destination> {
    let response = backend.create_checkout(request).await?;
    log::info!("checkout session created for price {}", request.price_id);
    Ok(Destination::External(response.url))
}

// =============================================================================
// RECONCILIATION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconcileState {
    /// No `session_id` in the return URL: success without details.
    NoSession,
    Loading,
    Loaded(CheckoutSession),
    /// This tab already reconciled the session.
    AlreadyReconciled,
    Failed(String),
}

/// Initial page state for the checkout-success route.
pub fn reconcile_start(session_id: Option<&str>) -> ReconcileState {
    match session_id {
        Some(_) => ReconcileState::Loading,
        None => ReconcileState::NoSession,
    }
}

/// Fetches checkout details at most once per session id in this tab.
///
/// A lookup that fails before reaching the server does not count.
pub async fn reconcile_session<B: Backend>(
    backend: &B,
    registry: &OnceRegistry,
    session_id: Option<&str>,
) -> ReconcileState {
    let Some(session_id) = session_id else {
        return ReconcileState::NoSession;
    };
    if !registry.claim(session_id) {
        return ReconcileState::AlreadyReconciled;
    }
    match backend.fetch_checkout_session(session_id).await {
        Ok(session) => ReconcileState::Loaded(session),
        Err(e) => {
            log::warn!("checkout session lookup failed: {e}");
            if matches!(e, ApiError::Network(_)) {
                registry.release(session_id);
            }
            ReconcileState::Failed(e.general_message(SESSION_FAILED))
        }
    }
}
