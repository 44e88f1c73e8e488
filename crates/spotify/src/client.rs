//! Raw catalog API client with the client-credentials token flow.
//!
//! One access token is cached in-process and refreshed shortly before it
//! expires; the site only ever needs this single app-level token.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::types::{Album, AlbumDetail, Artist, Track};

/// Token endpoint of the accounts service.
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Base URL of the catalog API.
const API_URL: &str = "https://api.spotify.com";

/// Refresh the cached token this long before its actual expiry.
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 300;

/// Market used for track and album listings.
const DEFAULT_MARKET: &str = "GB";

/// Errors from the catalog API layer.
#[derive(Debug, thiserror::Error)]
pub enum SpotifyError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// No artist id was supplied and none is configured.
    #[error("No artist id configured")]
    NoArtist,
}

/// Configuration for the catalog connection, loaded from environment
/// variables.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// The band's artist id, used when a lookup doesn't name one.
    pub artist_id: Option<String>,
}

impl SpotifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless both `SPOTIFY_CLIENT_ID` and
    /// `SPOTIFY_CLIENT_SECRET` are set.
    ///
    /// | Variable                | Required |
    /// |-------------------------|----------|
    /// | `SPOTIFY_CLIENT_ID`     | yes      |
    /// | `SPOTIFY_CLIENT_SECRET` | yes      |
    /// | `SPOTIFY_ARTIST_ID`     | no       |
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("SPOTIFY_CLIENT_ID").ok().filter(|v| !v.is_empty())?;
        let client_secret = std::env::var("SPOTIFY_CLIENT_SECRET")
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self {
            client_id,
            client_secret,
            artist_id: std::env::var("SPOTIFY_ARTIST_ID").ok().filter(|v| !v.is_empty()),
        })
    }
}

/// Response from the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// A cached access token and its refresh deadline.
#[derive(Debug, Clone)]
pub(crate) struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    pub(crate) fn new(token: String, expires_in_secs: u64, now: Instant) -> Self {
        let lifetime = expires_in_secs.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);
        Self {
            token,
            expires_at: now + Duration::from_secs(lifetime),
        }
    }

    pub(crate) fn is_valid(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// HTTP client for the catalog API.
pub struct SpotifyClient {
    client: reqwest::Client,
    config: SpotifyConfig,
    token: RwLock<Option<CachedToken>>,
}

impl SpotifyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SpotifyConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            token: RwLock::new(None),
        }
    }

    /// The configured default artist id, if any.
    pub fn artist_id(&self) -> Option<&str> {
        self.config.artist_id.as_deref()
    }

    /// Artist profile lookup.
    pub async fn artist(&self, artist_id: &str) -> Result<Artist, SpotifyError> {
        self.get_json(&format!("{API_URL}/v1/artists/{artist_id}"))
            .await
    }

    /// The artist's top tracks in the default market.
    pub async fn top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, SpotifyError> {
        #[derive(Deserialize)]
        struct TracksEnvelope {
            tracks: Vec<Track>,
        }
        let envelope: TracksEnvelope = self
            .get_json(&format!(
                "{API_URL}/v1/artists/{artist_id}/top-tracks?market={DEFAULT_MARKET}"
            ))
            .await?;
        Ok(envelope.tracks)
    }

    /// The artist's albums and singles, newest first as served.
    pub async fn albums(&self, artist_id: &str) -> Result<Vec<Album>, SpotifyError> {
        #[derive(Deserialize)]
        struct AlbumsEnvelope {
            items: Vec<Album>,
        }
        let envelope: AlbumsEnvelope = self
            .get_json(&format!(
                "{API_URL}/v1/artists/{artist_id}/albums?include_groups=album,single&limit=50&market={DEFAULT_MARKET}"
            ))
            .await?;
        Ok(envelope.items)
    }

    /// Full album detail including its track list.
    pub async fn album(&self, album_id: &str) -> Result<AlbumDetail, SpotifyError> {
        self.get_json(&format!("{API_URL}/v1/albums/{album_id}")).await
    }

    // -- token flow ---------------------------------------------------------

    /// Get a valid access token, refreshing the cached one when needed.
    async fn access_token(&self) -> Result<String, SpotifyError> {
        let now = Instant::now();
        if let Some(cached) = self.token.read().await.as_ref() {
            if cached.is_valid(now) {
                return Ok(cached.token.clone());
            }
        }

        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        let cached = CachedToken::new(token.access_token.clone(), token.expires_in, now);
        *self.token.write().await = Some(cached);

        tracing::debug!("Refreshed catalog access token");
        Ok(token.access_token)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SpotifyError> {
        let token = self.access_token().await?;
        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_token_valid_inside_lifetime() {
        let now = Instant::now();
        let token = CachedToken::new("tok".to_string(), 3600, now);
        assert!(token.is_valid(now));
        assert!(token.is_valid(now + Duration::from_secs(3600 - 301)));
    }

    #[test]
    fn cached_token_expires_with_safety_margin() {
        let now = Instant::now();
        let token = CachedToken::new("tok".to_string(), 3600, now);
        // The token is treated as expired 300 s before the server-side expiry.
        assert!(!token.is_valid(now + Duration::from_secs(3600 - 300)));
        assert!(!token.is_valid(now + Duration::from_secs(3600)));
    }

    #[test]
    fn short_lived_token_never_validates() {
        let now = Instant::now();
        let token = CachedToken::new("tok".to_string(), 120, now);
        assert!(!token.is_valid(now));
    }
}
