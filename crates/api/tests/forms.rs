//! Integration tests for the newsletter and contact form endpoints.
//!
//! The test mailer runs in disabled mode (log and succeed), so the happy
//! paths complete without SMTP. Rate limiting uses the production window
//! (60 s), far longer than any test run, so in-window behaviour is stable;
//! window-elapse behaviour is covered by the limiter's unit tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Newsletter: happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn newsletter_accepts_a_valid_signup() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/newsletter",
        "203.0.113.1",
        &json!({"email": "fan@example.com", "name": "Ana", "source": "footer"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Successfully subscribed to newsletter!");
}

#[tokio::test]
async fn newsletter_accepts_email_only() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/newsletter",
        "203.0.113.2",
        &json!({"email": "fan@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Newsletter: validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn newsletter_rejects_invalid_email_with_field_detail() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/newsletter",
        "203.0.113.3",
        &json!({"email": "not-an-email"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"]["email"][0], "Invalid email address");
}

#[tokio::test]
async fn newsletter_rejects_out_of_bounds_name() {
    let app = common::build_test_app();

    let response = post_json(
        app.clone(),
        "/api/v1/newsletter",
        "203.0.113.4",
        &json!({"email": "fan@example.com", "name": "A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["details"]["name"][0].as_str().unwrap().contains("2 and 100"));

    let response = post_json(
        app,
        "/api/v1/newsletter",
        "203.0.113.4",
        &json!({"email": "fan@example.com", "name": "A".repeat(101)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn newsletter_rejects_unknown_source() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/newsletter",
        "203.0.113.5",
        &json!({"email": "fan@example.com", "source": "carrier-pigeon"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["details"]["source"].is_array());
}

#[tokio::test]
async fn newsletter_rejects_malformed_json_body() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/newsletter")
                .header("content-type", "application/json")
                .header("x-forwarded-for", "203.0.113.6")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Newsletter: rate limiting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn newsletter_limits_to_three_requests_per_ip() {
    let app = common::build_test_app();
    let payload = json!({"email": "fan@example.com"});

    for _ in 0..3 {
        let response = post_json(app.clone(), "/api/v1/newsletter", "203.0.113.7", &payload).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = post_json(app.clone(), "/api/v1/newsletter", "203.0.113.7", &payload).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Too many requests. Please try again later.");

    // A different client is unaffected.
    let response = post_json(app, "/api/v1/newsletter", "203.0.113.99", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_submissions_still_consume_the_window() {
    let app = common::build_test_app();

    // Three invalid requests exhaust the window before validation ever
    // passes -- rate limiting runs first.
    for _ in 0..3 {
        let response = post_json(
            app.clone(),
            "/api/v1/newsletter",
            "203.0.113.8",
            &json!({"email": "not-an-email"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = post_json(
        app,
        "/api/v1/newsletter",
        "203.0.113.8",
        &json!({"email": "fan@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn newsletter_and_contact_share_one_window_per_ip() {
    let app = common::build_test_app();

    for _ in 0..3 {
        let response = post_json(
            app.clone(),
            "/api/v1/newsletter",
            "203.0.113.9",
            &json!({"email": "fan@example.com"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = post_json(
        app,
        "/api/v1/contact",
        "203.0.113.9",
        &json!({
            "name": "Ana",
            "email": "fan@example.com",
            "subject": "Booking",
            "message": "We'd love to have you play our venue."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_accepts_a_valid_submission() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/contact",
        "198.51.100.1",
        &json!({
            "name": "Ana",
            "email": "fan@example.com",
            "subject": "Booking enquiry",
            "message": "We'd love to have you play our venue this autumn."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("Message sent"));
}

#[tokio::test]
async fn contact_rejects_missing_fields_as_bad_request() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/contact",
        "198.51.100.2",
        &json!({"name": "Ana", "email": "fan@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_rejects_short_message_with_field_detail() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/contact",
        "198.51.100.3",
        &json!({
            "name": "Ana",
            "email": "fan@example.com",
            "subject": "Hi",
            "message": "short"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"]["subject"].is_array());
    assert!(body["details"]["message"].is_array());
}

#[tokio::test]
async fn contact_rejects_invalid_email() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/contact",
        "198.51.100.4",
        &json!({
            "name": "Ana",
            "email": "not-an-email",
            "subject": "Booking",
            "message": "We'd love to have you play our venue."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["details"]["email"][0], "Invalid email address");
}
