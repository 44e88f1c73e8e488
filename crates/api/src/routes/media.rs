//! Route definitions for the shared media folder.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(media::list))
}
