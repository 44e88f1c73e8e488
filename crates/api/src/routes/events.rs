//! Route definitions for events.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET /upcoming  -> upcoming
/// GET /past      -> past
/// GET /featured  -> featured
/// GET /{slug}    -> by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upcoming", get(events::upcoming))
        .route("/past", get(events::past))
        .route("/featured", get(events::featured))
        .route("/{slug}", get(events::by_slug))
}
