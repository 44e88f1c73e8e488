//! Handlers for event listings and lookups.
//!
//! All listing endpoints degrade to empty results when the CMS is
//! unavailable; only the slug lookup can 404.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use qlk_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /events/upcoming
// ---------------------------------------------------------------------------

/// Upcoming, non-cancelled events, soonest first.
pub async fn upcoming(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = state.content.upcoming_events().await;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// GET /events/past
// ---------------------------------------------------------------------------

/// Recent past events, most recent first.
pub async fn past(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = state.content.past_events().await;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// GET /events/featured
// ---------------------------------------------------------------------------

/// The first featured upcoming event, or null.
pub async fn featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let event = state.content.featured_event().await;
    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// GET /events/{slug}
// ---------------------------------------------------------------------------

/// A single event by slug.
pub async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event = state
        .content
        .event_by_slug(&slug)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            slug,
        }))?;
    Ok(Json(DataResponse { data: event }))
}
