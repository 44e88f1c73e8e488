//! Handler for tour calendar entries.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use qlk_core::error::CoreError;
use qlk_core::listing::clamp_limit;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of entries returned.
const DEFAULT_MAX_RESULTS: i64 = 10;

/// Upper bound on the `max` query parameter.
const MAX_MAX_RESULTS: i64 = 50;

/// Query parameters for the tour listing.
#[derive(Debug, Deserialize)]
pub struct TourParams {
    pub max: Option<i64>,
}

/// GET /tour -- upcoming calendar entries, soonest first.
pub async fn upcoming(
    State(state): State<AppState>,
    Query(params): Query<TourParams>,
) -> AppResult<impl IntoResponse> {
    let max_results = clamp_limit(params.max, DEFAULT_MAX_RESULTS, MAX_MAX_RESULTS);
    let entries = state.tour.upcoming(max_results).await;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /tour/{id} -- a single calendar entry.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = state
        .tour
        .by_id(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tour entry",
            slug: id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}
