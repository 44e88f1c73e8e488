//! Handlers for music release listings and lookups.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use qlk_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /releases
// ---------------------------------------------------------------------------

/// All releases, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let releases = state.content.releases().await;
    Ok(Json(DataResponse { data: releases }))
}

// ---------------------------------------------------------------------------
// GET /releases/featured
// ---------------------------------------------------------------------------

/// The newest featured release, or null.
pub async fn featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let release = state.content.featured_release().await;
    Ok(Json(DataResponse { data: release }))
}

// ---------------------------------------------------------------------------
// GET /releases/{slug}
// ---------------------------------------------------------------------------

/// A single release by slug, including credits.
pub async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let release = state
        .content
        .release_by_slug(&slug)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Release",
            slug,
        }))?;
    Ok(Json(DataResponse { data: release }))
}
