//! Handler for the band member listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /band -- active members in display order.
pub async fn members(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let members = state.content.band_members().await;
    Ok(Json(DataResponse { data: members }))
}
