//! Read-only Google API clients for the site.
//!
//! Two services share one [`auth::GoogleAuth`] grant: the tour calendar
//! ([`calendar`]) and the media file library ([`drive`]). Both degrade to
//! empty results when unconfigured or failing, per the site's contract
//! that a missing upstream never takes a page down.

pub mod auth;
pub mod calendar;
pub mod drive;

pub use auth::{GoogleAuth, GoogleError, ServiceAccountKey};
pub use calendar::{CalendarEvent, TourCalendar};
pub use drive::{DriveFile, MediaKind, MediaLibrary};
