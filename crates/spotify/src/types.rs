//! Wire types for the catalog API responses.
//!
//! Field names match the API's JSON exactly; only the subsets the site
//! renders are declared.

use serde::{Deserialize, Serialize};

/// One entry in an image set, largest first as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: u32,
    pub width: u32,
}

/// Follower count envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

/// Links out to the public catalog pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

/// Minimal artist reference embedded in tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

/// The band's artist profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub images: Vec<Image>,
    pub followers: Followers,
    pub genres: Vec<String>,
    pub external_urls: ExternalUrls,
    pub popularity: u32,
}

/// Album reference embedded in a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub id: String,
    pub name: String,
    pub images: Vec<Image>,
}

/// A single track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub preview_url: Option<String>,
    pub external_urls: ExternalUrls,
    pub track_number: u32,
    pub album: TrackAlbum,
    pub artists: Vec<ArtistRef>,
}

/// An album or single in the artist's discography.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_type: String,
    pub release_date: String,
    pub total_tracks: u32,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub artists: Vec<ArtistRef>,
}

/// Track list embedded in a full album lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracks {
    pub items: Vec<AlbumTrack>,
}

/// A track as listed inside an album (no album back-reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub preview_url: Option<String>,
    pub external_urls: ExternalUrls,
    pub track_number: u32,
    pub artists: Vec<ArtistRef>,
}

/// Full album detail including its track list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    pub tracks: AlbumTracks,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
