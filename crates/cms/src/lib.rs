//! Read-only client for the site's headless CMS.
//!
//! Content (events, releases, gallery, band members, site settings) is
//! authored in the hosted CMS and read back over its HTTP query API. This
//! crate holds the typed document shapes, the query strings, a thin
//! [`client::CmsClient`] for executing queries, and the [`content::Content`]
//! service the API handlers consume.

pub mod client;
pub mod content;
pub mod documents;
pub mod image;
pub mod queries;

pub use client::{CmsClient, CmsConfig, CmsError};
pub use content::Content;
