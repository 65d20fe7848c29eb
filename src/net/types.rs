//! Wire DTOs for the LocalConvert REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API exactly (camelCase for app-owned payloads,
//! snake_case for Stripe price objects passed through verbatim), so serde
//! derives stay schema-driven and no hand-written mapping is needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An account as returned by login and `/user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stripe_customer_id: Option<String>,
    #[serde(default)]
    pub stripe_current_subscription_id: Option<String>,
    /// ISO-8601 creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name shown in the header: the display name, else the email local part.
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.to_owned();
        }
        self.email.split('@').next().unwrap_or_default().to_owned()
    }

    /// Single uppercase letter for the avatar bubble.
    pub fn initial(&self) -> String {
        let source = if self.name.trim().is_empty() {
            self.email.as_str()
        } else {
            self.name.trim()
        };
        source
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Account summary echoed back by `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<RegisteredUser>,
}

/// Generic `{ success?, message }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Billing period unit shared by prices and subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    OneTime,
    Recurring,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecurring {
    pub interval: Interval,
    #[serde(default = "one")]
    pub interval_count: u32,
}

fn one() -> u32 {
    1
}

/// Stripe price object, passed through by `/subscriptions/prices`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    #[serde(default)]
    pub active: bool,
    pub currency: String,
    /// Amount in the currency's minor unit (cents for USD).
    #[serde(default)]
    pub unit_amount: Option<i64>,
    #[serde(default)]
    pub nickname: Option<String>,
    pub product: String,
    #[serde(default)]
    pub recurring: Option<PriceRecurring>,
    #[serde(rename = "type")]
    pub kind: PriceType,
    #[serde(default)]
    pub created: i64,
}

/// Stripe list envelope for prices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PriceList {
    #[serde(default)]
    pub data: Vec<Price>,
    #[serde(default)]
    pub has_more: bool,
}

/// Stripe subscription lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Incomplete,
    IncompleteExpired,
    PastDue,
    Trialing,
    Unpaid,
    #[serde(other)]
    Unknown,
}

/// Flattened subscription detail returned by `/subscriptions`.
///
/// Timestamps are Unix seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub interval: Option<Interval>,
    #[serde(default)]
    pub interval_count: Option<u32>,
    #[serde(default)]
    pub price_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub current_period_start: Option<i64>,
    #[serde(default)]
    pub current_period_end: Option<i64>,
    #[serde(default)]
    pub trial_start: Option<i64>,
    #[serde(default)]
    pub trial_end: Option<i64>,
    #[serde(default)]
    pub cancel_at: Option<i64>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub ended_at: Option<i64>,
}

impl Subscription {
    /// Timestamp used for ordering: `created`, else `startDate`, else zero.
    pub fn created_at(&self) -> i64 {
        self.created.or(self.start_date).unwrap_or(0)
    }
}

/// Response of `GET /subscriptions?customer_id=`.
///
/// Older deployments return a single `subscription`, newer ones a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    #[serde(default)]
    pub stripe_subscription_id: Option<String>,
    #[serde(default)]
    pub stripe_customer_id: Option<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl SubscriptionResponse {
    /// All subscriptions in the payload, de-duplicated by id.
    pub fn into_all(self) -> Vec<Subscription> {
        let mut all = self.subscriptions;
        if let Some(single) = self.subscription {
            if !all.iter().any(|s| s.id == single.id) {
                all.push(single);
            }
        }
        all
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub price_id: String,
    pub user_id: String,
    pub user_email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Stripe checkout session summary fetched after the redirect back.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub session_id: String,
    #[serde(default)]
    pub stripe_subscription_id: Option<String>,
    #[serde(default)]
    pub stripe_customer_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
}
