//! High-level content lookups for the API handlers.
//!
//! [`Content`] wraps an optional [`CmsClient`]: when the CMS is not
//! configured, or a query fails, list lookups degrade to empty results and
//! singleton lookups to `None`. Failures are logged, never propagated --
//! a content hiccup must not take a page down.

use serde::de::DeserializeOwned;

use crate::client::{CmsClient, CmsConfig};
use crate::documents::{BandMember, Event, GalleryItem, Release, SiteSettings};
use crate::queries;

/// Content service backed by the CMS, tolerant of it being absent.
pub struct Content {
    client: Option<CmsClient>,
}

impl Content {
    /// Build from the environment. Logs a warning when the CMS is not
    /// configured; all lookups then return empty results.
    pub fn from_env() -> Self {
        match CmsConfig::from_env() {
            Some(config) => Self {
                client: Some(CmsClient::new(config)),
            },
            None => {
                tracing::warn!("CMS_PROJECT_ID not set, content lookups disabled");
                Self { client: None }
            }
        }
    }

    /// Build around an existing client (tests, custom configuration).
    pub fn new(client: CmsClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// A service with no CMS behind it; every lookup is empty.
    pub fn disabled() -> Self {
        Self { client: None }
    }

    /// Whether a CMS client is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    // -- events -------------------------------------------------------------

    /// Upcoming, non-cancelled events, soonest first.
    pub async fn upcoming_events(&self) -> Vec<Event> {
        self.fetch_list(queries::UPCOMING_EVENTS, "upcoming events")
            .await
    }

    /// Past events, most recent first.
    pub async fn past_events(&self) -> Vec<Event> {
        self.fetch_list(&queries::past_events(), "past events").await
    }

    /// The first featured upcoming event.
    pub async fn featured_event(&self) -> Option<Event> {
        self.fetch_one(queries::FEATURED_EVENT, "featured event")
            .await
    }

    /// Event lookup by slug.
    pub async fn event_by_slug(&self, slug: &str) -> Option<Event> {
        self.fetch_one_by_slug(queries::EVENT_BY_SLUG, slug, "event")
            .await
    }

    // -- releases -----------------------------------------------------------

    /// All releases, newest first.
    pub async fn releases(&self) -> Vec<Release> {
        self.fetch_list(queries::RELEASES, "releases").await
    }

    /// The newest featured release.
    pub async fn featured_release(&self) -> Option<Release> {
        self.fetch_one(queries::FEATURED_RELEASE, "featured release")
            .await
    }

    /// Release lookup by slug.
    pub async fn release_by_slug(&self, slug: &str) -> Option<Release> {
        self.fetch_one_by_slug(queries::RELEASE_BY_SLUG, slug, "release")
            .await
    }

    // -- gallery ------------------------------------------------------------

    /// The main gallery listing, newest first.
    pub async fn gallery(&self) -> Vec<GalleryItem> {
        self.fetch_list(&queries::gallery(), "gallery").await
    }

    /// Featured gallery items.
    pub async fn featured_gallery(&self) -> Vec<GalleryItem> {
        self.fetch_list(&queries::featured_gallery(), "featured gallery")
            .await
    }

    // -- band / settings ----------------------------------------------------

    /// Active band members in display order.
    pub async fn band_members(&self) -> Vec<BandMember> {
        self.fetch_list(queries::BAND_MEMBERS, "band members").await
    }

    /// The site settings singleton.
    pub async fn site_settings(&self) -> Option<SiteSettings> {
        self.fetch_one(queries::SITE_SETTINGS, "site settings").await
    }

    // -- plumbing -----------------------------------------------------------

    async fn fetch_list<T: DeserializeOwned>(&self, groq: &str, what: &'static str) -> Vec<T> {
        let Some(client) = &self.client else {
            return Vec::new();
        };
        match client.query::<Vec<T>>(groq).await {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(%error, what, "CMS query failed");
                Vec::new()
            }
        }
    }

    async fn fetch_one<T: DeserializeOwned>(&self, groq: &str, what: &'static str) -> Option<T> {
        let client = self.client.as_ref()?;
        match client.query::<Option<T>>(groq).await {
            Ok(item) => item,
            Err(error) => {
                tracing::error!(%error, what, "CMS query failed");
                None
            }
        }
    }

    async fn fetch_one_by_slug<T: DeserializeOwned>(
        &self,
        groq: &str,
        slug: &str,
        what: &'static str,
    ) -> Option<T> {
        let client = self.client.as_ref()?;
        match client
            .query_with_params::<Option<T>>(groq, &[("slug", slug)])
            .await
        {
            Ok(item) => item,
            Err(error) => {
                tracing::error!(%error, what, slug, "CMS query failed");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_content_returns_empty_results() {
        let content = Content::disabled();
        assert!(!content.is_configured());
        assert!(content.upcoming_events().await.is_empty());
        assert!(content.releases().await.is_empty());
        assert!(content.gallery().await.is_empty());
        assert!(content.band_members().await.is_empty());
        assert!(content.site_settings().await.is_none());
        assert!(content.event_by_slug("anything").await.is_none());
    }
}
