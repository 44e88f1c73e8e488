pub mod band;
pub mod events;
pub mod forms;
pub mod gallery;
pub mod health;
pub mod media;
pub mod music;
pub mod releases;
pub mod settings;
pub mod tour;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events/upcoming            upcoming, non-cancelled events
/// /events/past                recent past events
/// /events/featured            first featured upcoming event
/// /events/{slug}              event detail
///
/// /releases                   all releases, newest first
/// /releases/featured          newest featured release
/// /releases/{slug}            release detail
///
/// /gallery                    gallery listing
/// /gallery/featured           featured gallery items
///
/// /band                       active band members
/// /settings                   site settings singleton
///
/// /music                      catalog snapshot (artist, top tracks, albums)
/// /tour                       upcoming tour calendar entries
/// /tour/{id}                  single tour calendar entry
/// /media                      shared media folder listing
///
/// /newsletter                 newsletter signup (POST)
/// /contact                    contact form (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/releases", releases::router())
        .nest("/gallery", gallery::router())
        .nest("/band", band::router())
        .nest("/settings", settings::router())
        .nest("/music", music::router())
        .nest("/tour", tour::router())
        .nest("/media", media::router())
        .merge(forms::router())
}
