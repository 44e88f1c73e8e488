//! Route definitions for the music catalog snapshot.

use axum::routing::get;
use axum::Router;

use crate::handlers::music;
use crate::state::AppState;

/// Routes mounted at `/music`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(music::snapshot))
}
