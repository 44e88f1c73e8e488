//! Typed CMS document shapes.
//!
//! These mirror the projections in [`crate::queries`], not the full studio
//! schemas: image references are already resolved to asset URLs, and slugs
//! are flattened to plain strings. All fields the CMS may omit are
//! `Option` or defaulted so a partially filled document still decodes.

use chrono::NaiveDate;
use qlk_core::types::{DocumentId, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A live show or festival appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub slug: String,
    pub date: Timestamp,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    pub venue: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub ticket_url: Option<String>,
    #[serde(default)]
    pub ticket_price: Option<String>,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lineup: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Releases
// ---------------------------------------------------------------------------

/// Kind of music release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Album,
    Ep,
    Single,
    Live,
    Compilation,
}

/// One track on a release's track list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseTrack {
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub spotify_track_id: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A music release (album, EP, single, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub slug: String,
    pub release_type: ReleaseType,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub spotify_id: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub apple_music_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub bandcamp_url: Option<String>,
    #[serde(default)]
    pub soundcloud_url: Option<String>,
    #[serde(default)]
    pub tracks: Vec<ReleaseTrack>,
    #[serde(default)]
    pub credits: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub cover_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Media kind of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryMediaType {
    Image,
    Video,
}

/// Reference to the event a gallery item was shot at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEventRef {
    pub title: String,
    pub slug: String,
}

/// A photo or video in the media gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub media_type: GalleryMediaType,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub event: Option<GalleryEventRef>,
}

// ---------------------------------------------------------------------------
// Band members
// ---------------------------------------------------------------------------

/// Personal social links for one member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberSocialLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A current member of the band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandMember {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub social_links: Option<MemberSocialLinks>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

/// Band-level social profile links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub spotify: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub bandcamp: Option<String>,
    #[serde(default)]
    pub soundcloud: Option<String>,
}

/// The dismissible announcement banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
}

/// Newsletter signup presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Global site configuration singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub booking_email: Option<String>,
    #[serde(default)]
    pub press_email: Option<String>,
    #[serde(default)]
    pub announcement: Option<Announcement>,
    #[serde(default)]
    pub newsletter: Option<NewsletterSettings>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub og_image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Subscribers
// ---------------------------------------------------------------------------

/// A newsletter subscriber record (authored and persisted in the CMS;
/// declared here for the document shape only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subscribed_at: Option<Timestamp>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
