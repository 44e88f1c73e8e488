//! Handler for the site settings singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /settings -- global site configuration, or null when unset.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.content.site_settings().await;
    Ok(Json(DataResponse { data: settings }))
}
