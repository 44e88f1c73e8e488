#![allow(dead_code)]

//! Shared harness for the API integration tests.
//!
//! Builds the full application router with the production middleware stack
//! but every upstream service disabled, so tests exercise routing,
//! validation, rate limiting, and the degrade-to-empty contract without
//! any network access.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use qlk_api::config::ServerConfig;
use qlk_api::rate_limit::RateLimiter;
use qlk_api::router::build_app_router;
use qlk_api::state::AppState;
use qlk_cms::Content;
use qlk_google::{MediaLibrary, TourCalendar};
use qlk_mailer::Mailer;
use qlk_spotify::Catalog;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        rate_limit_max_requests: 3,
        rate_limit_window_secs: 60,
    }
}

/// Build the full application router with all middleware layers and
/// disabled upstream services.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(Content::disabled()),
        catalog: Arc::new(Catalog::disabled()),
        tour: Arc::new(TourCalendar::disabled()),
        media: Arc::new(MediaLibrary::disabled()),
        mailer: Arc::new(Mailer::disabled()),
        rate_limiter: Arc::new(RateLimiter::new(
            config.rate_limit_max_requests,
            Duration::from_secs(config.rate_limit_window_secs),
        )),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body and a client IP header.
pub async fn post_json(
    app: Router,
    uri: &str,
    client_ip: &str,
    body: &serde_json::Value,
) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-forwarded-for", client_ip)
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
