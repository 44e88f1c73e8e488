use std::sync::Arc;

use qlk_cms::Content;
use qlk_google::{MediaLibrary, TourCalendar};
use qlk_mailer::Mailer;
use qlk_spotify::Catalog;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// CMS-backed content lookups.
    pub content: Arc<Content>,
    /// Music catalog lookups.
    pub catalog: Arc<Catalog>,
    /// Tour calendar lookups.
    pub tour: Arc<TourCalendar>,
    /// Shared media folder lookups.
    pub media: Arc<MediaLibrary>,
    /// Transactional email delivery.
    pub mailer: Arc<Mailer>,
    /// Per-client-IP limiter for the form endpoints.
    pub rate_limiter: Arc<RateLimiter>,
}
