//! Constants and validation rules for the two public form endpoints.
//!
//! Field bounds mirror what the site's forms enforce client-side; the
//! server is the authority. Payload DTOs in the API crate attach these
//! via `validator` derive attributes.

use validator::ValidationError;

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

/// Minimum length for a submitted name.
pub const NAME_MIN_LENGTH: u64 = 2;
/// Maximum length for a submitted name.
pub const NAME_MAX_LENGTH: u64 = 100;

/// Minimum length for a contact subject line.
pub const SUBJECT_MIN_LENGTH: u64 = 3;
/// Maximum length for a contact subject line.
pub const SUBJECT_MAX_LENGTH: u64 = 150;

/// Minimum length for a contact message body.
pub const MESSAGE_MIN_LENGTH: u64 = 10;
/// Maximum length for a contact message body.
pub const MESSAGE_MAX_LENGTH: u64 = 5_000;

// ---------------------------------------------------------------------------
// Newsletter signup source
// ---------------------------------------------------------------------------

/// Signup came from the site footer form.
pub const SOURCE_FOOTER: &str = "footer";
/// Signup came from the events page form.
pub const SOURCE_EVENTS: &str = "events";
/// Signup came from the newsletter popup.
pub const SOURCE_POPUP: &str = "popup";
/// Any other origin.
pub const SOURCE_OTHER: &str = "other";

/// All valid newsletter signup sources.
pub const VALID_SOURCES: &[&str] = &[SOURCE_FOOTER, SOURCE_EVENTS, SOURCE_POPUP, SOURCE_OTHER];

/// Validate a newsletter signup source value.
///
/// Used as a `validator` custom rule on the newsletter payload.
pub fn validate_source(source: &str) -> Result<(), ValidationError> {
    if VALID_SOURCES.contains(&source) {
        Ok(())
    } else {
        let mut error = ValidationError::new("source");
        error.message = Some("Unknown signup source".into());
        Err(error)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
