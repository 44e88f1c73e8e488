//! Route definitions for the media gallery.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET /          -> list
/// GET /featured  -> featured
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list))
        .route("/featured", get(gallery::featured))
}
