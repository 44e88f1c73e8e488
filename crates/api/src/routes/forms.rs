//! Route definitions for the public form endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Form routes mounted directly under `/api/v1`.
///
/// ```text
/// POST /newsletter  -> subscribe
/// POST /contact     -> contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/newsletter", post(forms::subscribe))
        .route("/contact", post(forms::contact))
}
