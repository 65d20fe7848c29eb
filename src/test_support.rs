//! Shared fixtures for logic tests: a recording `Backend` fake and sample data.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::net::api::Backend;
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::{
    CheckoutRequest, CheckoutResponse, CheckoutSession, LoginRequest, LoginResponse,
    MessageResponse, PriceList, RegisterRequest, RegisterResponse, ResetPasswordRequest,
    Subscription, SubscriptionResponse, SubscriptionStatus, User,
};

pub use futures::executor::block_on;

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(LoginRequest),
    Register(RegisterRequest),
    Verify(String),
    Resend(String),
    ForgotPassword(String),
    ResetPassword(ResetPasswordRequest),
    Profile(String),
    Prices,
    Subscription(String),
    Checkout(CheckoutRequest),
    CheckoutSession(String),
}

fn unconfigured<T>() -> ApiResult<T> {
    Err(ApiError::Rejected {
        status: 500,
        message: "not configured".to_owned(),
    })
}

/// Backend fake that records calls and replays configured results.
///
/// Verification models single-use tokens: tokens listed in `valid_tokens`
/// succeed once, then report "already used".
pub struct FakeBackend {
    pub calls: RefCell<Vec<Call>>,
    pub login: ApiResult<LoginResponse>,
    pub register: ApiResult<RegisterResponse>,
    pub message: ApiResult<MessageResponse>,
    pub profile: ApiResult<User>,
    pub prices: ApiResult<PriceList>,
    pub subscription: ApiResult<SubscriptionResponse>,
    pub checkout: ApiResult<CheckoutResponse>,
    pub checkout_session: ApiResult<CheckoutSession>,
    pub valid_tokens: RefCell<HashSet<String>>,
    pub expired_tokens: HashSet<String>,
    /// Answered with a 2xx `{ success: false }` body.
    pub refused_tokens: HashSet<String>,
    /// Returned for any token before the ledgers above are consulted.
    pub verify_error: Option<ApiError>,
    /// Runs while a profile request is in flight.
    pub during_profile: Option<Box<dyn Fn()>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login: unconfigured(),
            register: unconfigured(),
            message: Ok(MessageResponse::default()),
            profile: unconfigured(),
            prices: unconfigured(),
            subscription: unconfigured(),
            checkout: unconfigured(),
            checkout_session: unconfigured(),
            valid_tokens: RefCell::new(HashSet::new()),
            expired_tokens: HashSet::new(),
            refused_tokens: HashSet::new(),
            verify_error: None,
            during_profile: None,
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn with_valid_token(self, token: &str) -> Self {
        self.valid_tokens.borrow_mut().insert(token.to_owned());
        self
    }

    pub fn with_expired_token(mut self, token: &str) -> Self {
        self.expired_tokens.insert(token.to_owned());
        self
    }

    pub fn with_refused_token(mut self, token: &str) -> Self {
        self.refused_tokens.insert(token.to_owned());
        self
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Backend for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.record(Call::Login(request.clone()));
        self.login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        self.record(Call::Register(request.clone()));
        self.register.clone()
    }

    async fn verify_email(&self, token: &str) -> ApiResult<MessageResponse> {
        self.record(Call::Verify(token.to_owned()));
        if let Some(error) = &self.verify_error {
            return Err(error.clone());
        }
        if self.expired_tokens.contains(token) {
            return Err(ApiError::Rejected {
                status: 410,
                message: "Verification link has expired".to_owned(),
            });
        }
        if self.refused_tokens.contains(token) {
            return Ok(MessageResponse {
                success: Some(false),
                message: "Invalid token".to_owned(),
            });
        }
        if self.valid_tokens.borrow_mut().remove(token) {
            Ok(MessageResponse {
                success: Some(true),
                message: "Email verified".to_owned(),
            })
        } else {
            Err(ApiError::Rejected {
                status: 400,
                message: "Invalid or already used token".to_owned(),
            })
        }
    }

    async fn resend_verification(&self, email: &str) -> ApiResult<MessageResponse> {
        self.record(Call::Resend(email.to_owned()));
        self.message.clone()
    }

    async fn request_password_reset(&self, email: &str) -> ApiResult<MessageResponse> {
        self.record(Call::ForgotPassword(email.to_owned()));
        self.message.clone()
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<MessageResponse> {
        self.record(Call::ResetPassword(request.clone()));
        self.message.clone()
    }

    async fn fetch_profile(&self, token: &str) -> ApiResult<User> {
        self.record(Call::Profile(token.to_owned()));
        if let Some(during) = &self.during_profile {
            during();
        }
        self.profile.clone()
    }

    async fn fetch_prices(&self) -> ApiResult<PriceList> {
        self.record(Call::Prices);
        self.prices.clone()
    }

    async fn fetch_subscription(&self, customer_id: &str) -> ApiResult<SubscriptionResponse> {
        self.record(Call::Subscription(customer_id.to_owned()));
        self.subscription.clone()
    }

    async fn create_checkout(&self, request: &CheckoutRequest) -> ApiResult<CheckoutResponse> {
        self.record(Call::Checkout(request.clone()));
        self.checkout.clone()
    }

    async fn fetch_checkout_session(&self, session_id: &str) -> ApiResult<CheckoutSession> {
        self.record(Call::CheckoutSession(session_id.to_owned()));
        self.checkout_session.clone()
    }
}

pub fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        stripe_customer_id: Some("cus_1".to_owned()),
        stripe_current_subscription_id: None,
        created_at: Some("2025-01-01T00:00:00.000Z".to_owned()),
    }
}

pub fn subscription(id: &str, status: SubscriptionStatus, created: i64) -> Subscription {
    Subscription {
        id: id.to_owned(),
        status,
        amount: Some(999),
        currency: Some("usd".to_owned()),
        interval: None,
        interval_count: None,
        price_id: Some(format!("price_{id}")),
        product_id: None,
        product_name: None,
        created: Some(created),
        start_date: None,
        current_period_start: None,
        current_period_end: None,
        trial_start: None,
        trial_end: None,
        cancel_at: None,
        cancel_at_period_end: false,
        ended_at: None,
    }
}
