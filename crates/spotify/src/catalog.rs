//! Degrade-to-empty catalog service for the API handlers.
//!
//! Mirrors the contract of the other wrapper modules: lookups against a
//! missing or failing upstream yield empty results, with the error logged.

use serde::Serialize;

use crate::client::{SpotifyClient, SpotifyConfig, SpotifyError};
use crate::types::{Album, AlbumDetail, Artist, Track};

/// Combined catalog data for the music page, fetched concurrently.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub artist: Option<Artist>,
    pub top_tracks: Vec<Track>,
    pub albums: Vec<Album>,
}

/// Catalog service, tolerant of the API being unconfigured or down.
pub struct Catalog {
    client: Option<SpotifyClient>,
}

impl Catalog {
    /// Build from the environment. Logs a warning when credentials are not
    /// configured; all lookups then return empty results.
    pub fn from_env() -> Self {
        match SpotifyConfig::from_env() {
            Some(config) => Self {
                client: Some(SpotifyClient::new(config)),
            },
            None => {
                tracing::warn!("Spotify credentials not set, catalog lookups disabled");
                Self { client: None }
            }
        }
    }

    /// Build around an existing client.
    pub fn new(client: SpotifyClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// A service with no catalog behind it; every lookup is empty.
    pub fn disabled() -> Self {
        Self { client: None }
    }

    /// Whether catalog credentials are configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The band's artist profile.
    pub async fn artist(&self) -> Option<Artist> {
        let (client, artist_id) = self.client_and_artist()?;
        log_err(client.artist(&artist_id).await, "artist")
    }

    /// The band's top tracks.
    pub async fn top_tracks(&self) -> Vec<Track> {
        let Some((client, artist_id)) = self.client_and_artist() else {
            return Vec::new();
        };
        log_err(client.top_tracks(&artist_id).await, "top tracks").unwrap_or_default()
    }

    /// The band's discography.
    pub async fn albums(&self) -> Vec<Album> {
        let Some((client, artist_id)) = self.client_and_artist() else {
            return Vec::new();
        };
        log_err(client.albums(&artist_id).await, "albums").unwrap_or_default()
    }

    /// Full album detail.
    pub async fn album(&self, album_id: &str) -> Option<AlbumDetail> {
        let client = self.client.as_ref()?;
        log_err(client.album(album_id).await, "album")
    }

    /// Artist, top tracks, and albums in one concurrent fetch.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let (artist, top_tracks, albums) =
            tokio::join!(self.artist(), self.top_tracks(), self.albums());
        CatalogSnapshot {
            artist,
            top_tracks,
            albums,
        }
    }

    fn client_and_artist(&self) -> Option<(&SpotifyClient, String)> {
        let client = self.client.as_ref()?;
        let artist_id = client.artist_id()?.to_string();
        Some((client, artist_id))
    }
}

fn log_err<T>(result: Result<T, SpotifyError>, what: &'static str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(%error, what, "Catalog lookup failed");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
