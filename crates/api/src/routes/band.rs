//! Route definitions for band members.

use axum::routing::get;
use axum::Router;

use crate::handlers::band;
use crate::state::AppState;

/// Routes mounted at `/band`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(band::members))
}
