//! Transactional email delivery for the site's forms.
//!
//! [`Mailer`] wraps the async SMTP transport. When `SMTP_HOST` is not set
//! the mailer runs in disabled mode: sends are logged and reported as
//! successful, so the forms keep working in development without a mail
//! account.

pub mod config;
pub mod messages;
pub mod send;

pub use config::MailerConfig;
pub use send::{ContactMessage, Mailer, MailerError, NewsletterSignup};
