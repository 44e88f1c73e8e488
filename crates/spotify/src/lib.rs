//! Music catalog metadata client (Spotify Web API, client-credentials tier).
//!
//! [`client::SpotifyClient`] handles the token flow and raw lookups;
//! [`catalog::Catalog`] is the degrade-to-empty service the API handlers
//! consume. Display helpers (duration, image selection, embed URLs) live
//! in [`display`].

pub mod catalog;
pub mod client;
pub mod display;
pub mod types;

pub use catalog::{Catalog, CatalogSnapshot};
pub use client::{SpotifyClient, SpotifyConfig, SpotifyError};
