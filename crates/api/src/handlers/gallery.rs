//! Handlers for the media gallery.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /gallery -- the main gallery listing, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.content.gallery().await;
    Ok(Json(DataResponse { data: items }))
}

/// GET /gallery/featured -- featured gallery items.
pub async fn featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.content.featured_gallery().await;
    Ok(Json(DataResponse { data: items }))
}
