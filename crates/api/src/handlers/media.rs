//! Handler for the shared media folder listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use qlk_google::MediaKind;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the media listing.
#[derive(Debug, Deserialize)]
pub struct MediaParams {
    /// Restrict to one media kind (`image`, `video`, `audio`).
    pub kind: Option<MediaKind>,
}

/// GET /media -- files in the shared folder, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MediaParams>,
) -> AppResult<impl IntoResponse> {
    let files = match params.kind {
        Some(kind) => state.media.media_by_kind(kind).await,
        None => state.media.media_files().await,
    };
    Ok(Json(DataResponse { data: files }))
}
