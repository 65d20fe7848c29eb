//! REST client for the LocalConvert API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to `ApiError::Unavailable`, so logic
//! modules compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Each endpoint returns `ApiResult<T>`. Non-2xx bodies are reduced to the
//! server's `message`/`error` text or the endpoint fallback; transport faults
//! become `ApiError::Network`. Nothing here panics or navigates: deciding what
//! to do with a result is the caller's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::types::{
    CheckoutRequest, CheckoutResponse, CheckoutSession, EmailRequest, LoginRequest, LoginResponse,
    MessageResponse, PriceList, RegisterRequest, RegisterResponse, ResetPasswordRequest,
    SubscriptionResponse, User,
};
use crate::config::AppConfig;

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";
const VERIFY_FALLBACK: &str = "Verification failed";
const RESEND_FALLBACK: &str = "Resend failed";
const FORGOT_FALLBACK: &str = "Failed to send reset link";
const RESET_FALLBACK: &str = "Failed to reset password";
const PROFILE_FALLBACK: &str = "Failed to fetch profile";
const PRICES_FALLBACK: &str = "Failed to fetch prices";
const SUBSCRIPTION_FALLBACK: &str = "Failed to get subscription";
const CHECKOUT_FALLBACK: &str = "Failed to create checkout session";
const SESSION_FALLBACK: &str = "Failed to retrieve Stripe session";

/// Remote operations the UI depends on.
///
/// Pages use [`HttpBackend`]; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse>;
    async fn verify_email(&self, token: &str) -> ApiResult<MessageResponse>;
    async fn resend_verification(&self, email: &str) -> ApiResult<MessageResponse>;
    async fn request_password_reset(&self, email: &str) -> ApiResult<MessageResponse>;
    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<MessageResponse>;
    async fn fetch_profile(&self, token: &str) -> ApiResult<User>;
    async fn fetch_prices(&self) -> ApiResult<PriceList>;
    async fn fetch_subscription(&self, customer_id: &str) -> ApiResult<SubscriptionResponse>;
    async fn create_checkout(&self, request: &CheckoutRequest) -> ApiResult<CheckoutResponse>;
    async fn fetch_checkout_session(&self, session_id: &str) -> ApiResult<CheckoutSession>;
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct PricesEnvelope {
    data: PriceList,
}

/// `fetch`-backed implementation rooted at the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        fallback: &str,
    ) -> ApiResult<T> {
        #[cfg(feature = "csr")]
        {
            let url = build_url(&self.base_url, path);
            let mut builder =
                gloo_net::http::Request::get(&url).header("Content-Type", "application/json");
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let result = match builder.send().await {
                Ok(response) => read_response(response, fallback).await,
                Err(e) => Err(ApiError::Network(e.to_string())),
            };
            log_failure("GET", path, result.as_ref().err());
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, bearer, fallback);
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<T> {
        #[cfg(feature = "csr")]
        {
            let url = build_url(&self.base_url, path);
            let request = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            let result = match request.send().await {
                Ok(response) => read_response(response, fallback).await,
                Err(e) => Err(ApiError::Network(e.to_string())),
            };
            log_failure("POST", path, result.as_ref().err());
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body, fallback);
            Err(ApiError::Unavailable)
        }
    }
}

impl Backend for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post("/auth/login", request, LOGIN_FALLBACK).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        self.post("/auth/register", request, REGISTER_FALLBACK).await
    }

    async fn verify_email(&self, token: &str) -> ApiResult<MessageResponse> {
        self.get(&with_query("/auth/verify", "token", token), None, VERIFY_FALLBACK)
            .await
    }

    async fn resend_verification(&self, email: &str) -> ApiResult<MessageResponse> {
        let body = EmailRequest {
            email: email.to_owned(),
        };
        self.post("/auth/resend-verification", &body, RESEND_FALLBACK)
            .await
    }

    async fn request_password_reset(&self, email: &str) -> ApiResult<MessageResponse> {
        let body = EmailRequest {
            email: email.to_owned(),
        };
        self.post("/auth/forgot-password", &body, FORGOT_FALLBACK).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<MessageResponse> {
        self.post("/auth/reset-password", request, RESET_FALLBACK).await
    }

    async fn fetch_profile(&self, token: &str) -> ApiResult<User> {
        let envelope: ProfileEnvelope = self
            .get("/user/profile", Some(token), PROFILE_FALLBACK)
            .await?;
        Ok(envelope.user)
    }

    async fn fetch_prices(&self) -> ApiResult<PriceList> {
        let envelope: PricesEnvelope = self
            .get("/subscriptions/prices", None, PRICES_FALLBACK)
            .await?;
        Ok(envelope.data)
    }

    async fn fetch_subscription(&self, customer_id: &str) -> ApiResult<SubscriptionResponse> {
        self.get(
            &with_query("/subscriptions", "customer_id", customer_id),
            None,
            SUBSCRIPTION_FALLBACK,
        )
        .await
    }

    async fn create_checkout(&self, request: &CheckoutRequest) -> ApiResult<CheckoutResponse> {
        self.post("/subscriptions/checkout", request, CHECKOUT_FALLBACK)
            .await
    }

    async fn fetch_checkout_session(&self, session_id: &str) -> ApiResult<CheckoutSession> {
        self.get(
            &with_query("/session", "session_id", session_id),
            None,
            SESSION_FALLBACK,
        )
        .await
    }
}

#[cfg(feature = "csr")]
async fn read_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
    fallback: &str,
) -> ApiResult<T> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::rejected(status, &body, fallback))
    }
}

/// Logs failures by route only; query strings may carry single-use tokens.
#[cfg(feature = "csr")]
fn log_failure(method: &str, path: &str, error: Option<&ApiError>) {
    if let Some(error) = error {
        log::warn!("{method} {} failed: {error}", route_of(path));
    }
}

/// Joins the API base and a path with exactly one slash.
#[cfg(any(test, feature = "csr"))]
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Appends one percent-encoded query pair.
fn with_query(path: &str, key: &str, value: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{path}?{query}")
}

#[cfg(any(test, feature = "csr"))]
fn route_of(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}
