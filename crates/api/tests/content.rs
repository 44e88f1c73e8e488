//! Integration tests for the content endpoints.
//!
//! Every upstream is disabled in the test harness, so these verify the
//! degrade-to-empty contract: a missing CMS, catalog, calendar, or media
//! folder yields empty data with a 200, never an error response.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: list endpoints return empty arrays when upstreams are missing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_endpoints_degrade_to_empty_arrays() {
    let app = common::build_test_app();

    for uri in [
        "/api/v1/events/upcoming",
        "/api/v1/events/past",
        "/api/v1/releases",
        "/api/v1/gallery",
        "/api/v1/gallery/featured",
        "/api/v1/band",
        "/api/v1/tour",
        "/api/v1/media",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should be 200");

        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]), "{uri} should be empty");
    }
}

// ---------------------------------------------------------------------------
// Test: singleton endpoints return null data when upstreams are missing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn singleton_endpoints_degrade_to_null() {
    let app = common::build_test_app();

    for uri in [
        "/api/v1/events/featured",
        "/api/v1/releases/featured",
        "/api/v1/settings",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should be 200");

        let json = body_json(response).await;
        assert!(json["data"].is_null(), "{uri} should carry null data");
    }
}

// ---------------------------------------------------------------------------
// Test: the music snapshot keeps its shape with an empty catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn music_snapshot_keeps_shape_when_catalog_is_missing() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/music").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["artist"].is_null());
    assert_eq!(json["data"]["top_tracks"], serde_json::json!([]));
    assert_eq!(json["data"]["albums"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: slug lookups 404 when the document is absent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_event_slug_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/events/no-such-show").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("no-such-show"));
}

#[tokio::test]
async fn missing_release_slug_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/releases/no-such-record").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: query parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tour_accepts_and_clamps_max_parameter() {
    let app = common::build_test_app();

    for uri in ["/api/v1/tour?max=5", "/api/v1/tour?max=5000", "/api/v1/tour?max=-1"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should be 200");
    }
}

#[tokio::test]
async fn media_kind_filter_accepts_known_kinds_only() {
    let app = common::build_test_app();

    for uri in ["/api/v1/media?kind=image", "/api/v1/media?kind=video", "/api/v1/media?kind=audio"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should be 200");
    }

    let response = get(app, "/api/v1/media?kind=hologram").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
