use super::*;

#[test]
fn rejected_prefers_message_field() {
    let err = ApiError::rejected(401, r#"{"message":"Invalid credentials"}"#, "Login failed");
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_owned()
        }
    );
}

#[test]
fn rejected_falls_back_to_error_field() {
    let err = ApiError::rejected(400, r#"{"error":"No such price"}"#, "Failed to create checkout session");
    assert_eq!(err.to_string(), "No such price");
}

#[test]
fn rejected_uses_fallback_for_non_json_or_blank_bodies() {
    assert_eq!(ApiError::rejected(502, "<html>bad gateway</html>", "Login failed").to_string(), "Login failed");
    assert_eq!(ApiError::rejected(500, r#"{"message":"   "}"#, "Resend failed").to_string(), "Resend failed");
    assert_eq!(ApiError::rejected(500, "", "Verification failed").to_string(), "Verification failed");
}

#[test]
fn rejected_truncates_long_messages() {
    let body = serde_json::json!({ "message": "x".repeat(500) }).to_string();
    let err = ApiError::rejected(400, &body, "fallback");
    assert_eq!(err.to_string().len(), 200);
}

#[test]
fn general_message_maps_each_category() {
    let rejected = ApiError::Rejected {
        status: 409,
        message: "Email already registered".to_owned(),
    };
    assert_eq!(rejected.general_message("Registration failed"), "Email already registered");
    assert_eq!(
        ApiError::Network("Failed to fetch".to_owned()).general_message("Login failed"),
        NETWORK_ERROR
    );
    assert_eq!(
        ApiError::Decode("eof".to_owned()).general_message("Login failed. Please try again."),
        "Login failed. Please try again."
    );
    assert_eq!(ApiError::Unavailable.general_message("x"), "x");
}

#[test]
fn is_expired_detects_gone_status_and_message() {
    assert!(ApiError::Rejected { status: 410, message: "Gone".to_owned() }.is_expired());
    assert!(
        ApiError::Rejected {
            status: 400,
            message: "Verification token has Expired".to_owned()
        }
        .is_expired()
    );
    assert!(!ApiError::Rejected { status: 400, message: "Invalid token".to_owned() }.is_expired());
    assert!(!ApiError::Network("expired".to_owned()).is_expired());
}

#[test]
fn status_only_for_rejections() {
    assert_eq!(ApiError::Rejected { status: 404, message: String::new() }.status(), Some(404));
    assert_eq!(ApiError::Unavailable.status(), None);
}
