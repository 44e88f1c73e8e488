//! Handler for the combined music catalog snapshot.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /music -- artist profile, top tracks, and albums in one payload.
///
/// The three lookups run concurrently; any failing part comes back empty.
pub async fn snapshot(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.catalog.snapshot().await;
    Ok(Json(DataResponse { data: snapshot }))
}
