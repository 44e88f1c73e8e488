//! Route definitions for music releases.

use axum::routing::get;
use axum::Router;

use crate::handlers::releases;
use crate::state::AppState;

/// Routes mounted at `/releases`.
///
/// ```text
/// GET /          -> list
/// GET /featured  -> featured
/// GET /{slug}    -> by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(releases::list))
        .route("/featured", get(releases::featured))
        .route("/{slug}", get(releases::by_slug))
}
