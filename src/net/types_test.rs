use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(name: &str, email: &str) -> User {
    User {
        id: "u-1".to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
        stripe_customer_id: None,
        stripe_current_subscription_id: None,
        created_at: None,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-7",
        "email": "ada@example.com",
        "name": "Ada",
        "stripeCustomerId": "cus_123",
        "stripeCurrentSubscriptionId": null,
        "createdAt": "2025-01-02T03:04:05.000Z"
    }))
    .unwrap();
    assert_eq!(user.stripe_customer_id.as_deref(), Some("cus_123"));
    assert_eq!(user.stripe_current_subscription_id, None);
    assert_eq!(user.created_at.as_deref(), Some("2025-01-02T03:04:05.000Z"));
}

#[test]
fn user_serializes_back_to_camel_case_for_storage() {
    let value = serde_json::to_value(make_user("Ada", "ada@example.com")).unwrap();
    assert!(value.get("stripeCustomerId").is_some());
    assert!(value.get("stripe_customer_id").is_none());
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    assert_eq!(make_user("Ada", "ada@example.com").display_name(), "Ada");
    assert_eq!(make_user("  ", "grace@example.com").display_name(), "grace");
}

#[test]
fn initial_is_uppercased_from_name_or_email() {
    assert_eq!(make_user("ada", "x@example.com").initial(), "A");
    assert_eq!(make_user("", "grace@example.com").initial(), "G");
    assert_eq!(make_user("", "").initial(), "");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_tolerates_missing_token_and_user() {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({"message": "Please verify your email"})).unwrap();
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn reset_password_request_serializes_token_and_password() {
    let body = serde_json::to_value(ResetPasswordRequest {
        token: "tok".to_owned(),
        password: "hunter22".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"token": "tok", "password": "hunter22"}));
}

// =============================================================
// Billing payloads
// =============================================================

#[test]
fn checkout_request_uses_api_field_names() {
    let body = serde_json::to_value(CheckoutRequest {
        price_id: "price_1".to_owned(),
        user_id: "u-1".to_owned(),
        user_email: "ada@example.com".to_owned(),
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({"priceId": "price_1", "userId": "u-1", "userEmail": "ada@example.com"})
    );
}

#[test]
fn price_parses_stripe_shape() {
    let price: Price = serde_json::from_value(serde_json::json!({
        "id": "price_1",
        "object": "price",
        "active": true,
        "currency": "usd",
        "unit_amount": 999,
        "nickname": "Pro",
        "product": "prod_1",
        "recurring": {"interval": "month", "interval_count": 1, "usage_type": "licensed"},
        "type": "recurring",
        "created": 1_700_000_000
    }))
    .unwrap();
    assert_eq!(price.kind, PriceType::Recurring);
    assert_eq!(price.recurring.unwrap().interval, Interval::Month);
    assert_eq!(price.unit_amount, Some(999));
}

#[test]
fn subscription_status_parses_snake_case_and_unknown() {
    let parse = |s: &str| serde_json::from_value::<SubscriptionStatus>(serde_json::json!(s)).unwrap();
    assert_eq!(parse("past_due"), SubscriptionStatus::PastDue);
    assert_eq!(parse("incomplete_expired"), SubscriptionStatus::IncompleteExpired);
    assert_eq!(parse("paused"), SubscriptionStatus::Unknown);
}

#[test]
fn subscription_created_at_prefers_created_then_start_date() {
    let mut sub: Subscription = serde_json::from_value(serde_json::json!({
        "id": "sub_1",
        "status": "active",
        "startDate": 50
    }))
    .unwrap();
    assert_eq!(sub.created_at(), 50);
    sub.created = Some(70);
    assert_eq!(sub.created_at(), 70);
    sub.created = None;
    sub.start_date = None;
    assert_eq!(sub.created_at(), 0);
}

#[test]
fn subscription_response_merges_single_and_list_without_duplicates() {
    let resp: SubscriptionResponse = serde_json::from_value(serde_json::json!({
        "stripeCustomerId": "cus_1",
        "subscription": {"id": "sub_1", "status": "active"},
        "subscriptions": [
            {"id": "sub_1", "status": "active"},
            {"id": "sub_2", "status": "trialing"}
        ]
    }))
    .unwrap();
    let ids: Vec<String> = resp.into_all().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["sub_1", "sub_2"]);
}

#[test]
fn checkout_session_parses_nullable_ids() {
    let session: CheckoutSession = serde_json::from_value(serde_json::json!({
        "sessionId": "cs_1",
        "stripeSubscriptionId": "sub_9",
        "stripeCustomerId": null,
        "status": "complete",
        "paymentStatus": "paid"
    }))
    .unwrap();
    assert_eq!(session.stripe_subscription_id.as_deref(), Some("sub_9"));
    assert_eq!(session.stripe_customer_id, None);
}
