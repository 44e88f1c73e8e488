//! SMTP configuration.

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender when `EMAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "Queen Less Kings <noreply@queenlesskings.com>";

/// Default band inbox when `EMAIL_TO` is not set.
const DEFAULT_TO_ADDRESS: &str = "info@queenlesskings.com";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" mailbox for all outgoing mail.
    pub from_address: String,
    /// Band inbox that receives contact form submissions.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured; the mailer then runs in disabled mode.
    ///
    /// | Variable        | Required | Default                                      |
    /// |-----------------|----------|----------------------------------------------|
    /// | `SMTP_HOST`     | yes      | —                                            |
    /// | `SMTP_PORT`     | no       | `587`                                        |
    /// | `EMAIL_FROM`    | no       | `Queen Less Kings <noreply@queenlesskings.com>` |
    /// | `EMAIL_TO`      | no       | `info@queenlesskings.com`                    |
    /// | `SMTP_USER`     | no       | —                                            |
    /// | `SMTP_PASSWORD` | no       | —                                            |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok().filter(|v| !v.is_empty())?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            to_address: std::env::var("EMAIL_TO")
                .unwrap_or_else(|_| DEFAULT_TO_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}
