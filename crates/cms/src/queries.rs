//! GROQ query strings for the site's content.
//!
//! Projections rename CMS-side field paths (`slug.current`, image asset
//! dereferences) into the flat shapes in [`crate::documents`]. Orderings
//! and window sizes are part of the contract: upcoming events ascending,
//! everything else newest-first.

use qlk_core::listing::{FEATURED_GALLERY_LIMIT, GALLERY_LIMIT, PAST_EVENTS_LIMIT};

/// Upcoming, non-cancelled events, soonest first.
pub const UPCOMING_EVENTS: &str = r#"*[_type == "event" && date >= now() && !cancelled] | order(date asc) {
  _id, title, "slug": slug.current, date, endDate, venue, address, city, country,
  ticketUrl, ticketPrice, soldOut, cancelled, description, lineup, featured,
  "imageUrl": image.asset->url
}"#;

/// The first featured upcoming event, if any.
pub const FEATURED_EVENT: &str = r#"*[_type == "event" && featured == true && date >= now()] | order(date asc) [0] {
  _id, title, "slug": slug.current, date, endDate, venue, address, city, country,
  ticketUrl, ticketPrice, soldOut, cancelled, featured,
  "imageUrl": image.asset->url
}"#;

/// A single event looked up by slug.
pub const EVENT_BY_SLUG: &str = r#"*[_type == "event" && slug.current == $slug][0] {
  _id, title, "slug": slug.current, date, endDate, venue, address, city, country,
  ticketUrl, ticketPrice, soldOut, cancelled, description, lineup, featured,
  "imageUrl": image.asset->url
}"#;

/// All releases, newest first.
pub const RELEASES: &str = r#"*[_type == "release"] | order(releaseDate desc) {
  _id, title, "slug": slug.current, releaseType, releaseDate, description,
  spotifyId, spotifyUrl, appleMusicUrl, youtubeUrl, bandcampUrl, soundcloudUrl,
  tracks, featured, "coverUrl": coverArt.asset->url
}"#;

/// The newest featured release, if any.
pub const FEATURED_RELEASE: &str = r#"*[_type == "release" && featured == true] | order(releaseDate desc) [0] {
  _id, title, "slug": slug.current, releaseType, releaseDate,
  spotifyId, spotifyUrl, featured, "coverUrl": coverArt.asset->url
}"#;

/// A single release looked up by slug, including credits.
pub const RELEASE_BY_SLUG: &str = r#"*[_type == "release" && slug.current == $slug][0] {
  _id, title, "slug": slug.current, releaseType, releaseDate, description,
  spotifyId, spotifyUrl, appleMusicUrl, youtubeUrl, bandcampUrl, soundcloudUrl,
  tracks, credits, featured, "coverUrl": coverArt.asset->url
}"#;

/// Active band members in display order.
pub const BAND_MEMBERS: &str = r#"*[_type == "bandMember" && active == true] | order(order asc) {
  _id, name, "slug": slug.current, role, bio, socialLinks,
  "photoUrl": photo.asset->url
}"#;

/// The site settings singleton.
pub const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0] {
  title, tagline, description, socialLinks, contactEmail, bookingEmail,
  pressEmail, announcement, newsletter,
  "logoUrl": logo.asset->url, "ogImageUrl": ogImage.asset->url
}"#;

/// Past events, most recent first, capped at [`PAST_EVENTS_LIMIT`].
pub fn past_events() -> String {
    format!(
        r#"*[_type == "event" && date < now()] | order(date desc) [0...{PAST_EVENTS_LIMIT}] {{
  _id, title, "slug": slug.current, date, venue, city, country, featured,
  "imageUrl": image.asset->url
}}"#
    )
}

/// The main gallery listing, newest first, capped at [`GALLERY_LIMIT`].
pub fn gallery() -> String {
    format!(
        r#"*[_type == "galleryItem"] | order(date desc) [0...{GALLERY_LIMIT}] {{
  _id, title, mediaType, videoUrl, youtubeId, date, tags, photographer,
  description, featured, "imageUrl": image.asset->url,
  "event": event->{{title, "slug": slug.current}}
}}"#
    )
}

/// Featured gallery items, capped at [`FEATURED_GALLERY_LIMIT`].
pub fn featured_gallery() -> String {
    format!(
        r#"*[_type == "galleryItem" && featured == true] | order(date desc) [0...{FEATURED_GALLERY_LIMIT}] {{
  _id, title, mediaType, youtubeId, featured, "imageUrl": image.asset->url
}}"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
