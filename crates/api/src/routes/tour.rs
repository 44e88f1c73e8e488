//! Route definitions for tour calendar entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::tour;
use crate::state::AppState;

/// Routes mounted at `/tour`.
///
/// ```text
/// GET /      -> upcoming
/// GET /{id}  -> by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tour::upcoming))
        .route("/{id}", get(tour::by_id))
}
