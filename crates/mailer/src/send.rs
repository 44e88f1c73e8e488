//! The mailer itself.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailerConfig;
use crate::messages;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// A newsletter signup to welcome.
#[derive(Debug, Clone)]
pub struct NewsletterSignup {
    pub email: String,
    pub name: Option<String>,
    pub source: Option<String>,
}

/// A contact form submission to forward.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Sends the site's transactional mail over SMTP.
///
/// Without SMTP configuration the mailer is disabled: sends log the
/// would-be message and report success, so the form endpoints behave the
/// same in development.
pub struct Mailer {
    config: Option<MailerConfig>,
}

impl Mailer {
    /// Build from the environment; disabled when `SMTP_HOST` is unset.
    pub fn from_env() -> Self {
        let config = MailerConfig::from_env();
        if config.is_none() {
            tracing::warn!("SMTP_HOST not set, email delivery disabled");
        }
        Self { config }
    }

    /// A mailer with the given SMTP configuration.
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// A mailer that logs and succeeds without sending.
    pub fn disabled() -> Self {
        Self { config: None }
    }

    /// Whether SMTP delivery is configured.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Send the newsletter welcome mail to a new subscriber.
    pub async fn send_newsletter_welcome(
        &self,
        signup: &NewsletterSignup,
    ) -> Result<(), MailerError> {
        let Some(config) = &self.config else {
            tracing::info!(
                email = %signup.email,
                source = signup.source.as_deref().unwrap_or("unknown"),
                "Email delivery disabled, skipping newsletter welcome",
            );
            return Ok(());
        };

        let email = Message::builder()
            .from(config.from_address.parse()?)
            .to(signup.email.parse()?)
            .subject(messages::newsletter_welcome_subject())
            .header(ContentType::TEXT_HTML)
            .body(messages::newsletter_welcome_body(signup.name.as_deref()))
            .map_err(|e| MailerError::Build(e.to_string()))?;

        self.transport(config)?.send(email).await?;
        tracing::info!(email = %signup.email, "Newsletter welcome sent");
        Ok(())
    }

    /// Forward a contact submission to the band inbox and confirm to the
    /// sender.
    pub async fn send_contact(&self, contact: &ContactMessage) -> Result<(), MailerError> {
        let Some(config) = &self.config else {
            tracing::info!(
                from = %contact.email,
                subject = %contact.subject,
                "Email delivery disabled, skipping contact forward",
            );
            return Ok(());
        };

        let notification = Message::builder()
            .from(config.from_address.parse()?)
            .to(config.to_address.parse()?)
            .reply_to(contact.email.parse()?)
            .subject(messages::contact_notification_subject(&contact.subject))
            .header(ContentType::TEXT_HTML)
            .body(messages::contact_notification_body(
                &contact.name,
                &contact.email,
                &contact.message,
            ))
            .map_err(|e| MailerError::Build(e.to_string()))?;

        let confirmation = Message::builder()
            .from(config.from_address.parse()?)
            .to(contact.email.parse()?)
            .subject(messages::contact_confirmation_subject())
            .header(ContentType::TEXT_HTML)
            .body(messages::contact_confirmation_body(&contact.name))
            .map_err(|e| MailerError::Build(e.to_string()))?;

        let transport = self.transport(config)?;
        transport.send(notification).await?;
        transport.send(confirmation).await?;
        tracing::info!(from = %contact.email, "Contact submission forwarded");
        Ok(())
    }

    fn transport(
        &self,
        config: &MailerConfig,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(builder.build())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_mailer_reports_success() {
        let mailer = Mailer::disabled();
        assert!(!mailer.is_configured());

        let signup = NewsletterSignup {
            email: "fan@example.com".to_string(),
            name: Some("Ana".to_string()),
            source: None,
        };
        assert!(mailer.send_newsletter_welcome(&signup).await.is_ok());

        let contact = ContactMessage {
            name: "Ana".to_string(),
            email: "fan@example.com".to_string(),
            subject: "Booking".to_string(),
            message: "We'd love to have you play.".to_string(),
        };
        assert!(mailer.send_contact(&contact).await.is_ok());
    }

    #[test]
    fn error_display_covers_build_variant() {
        let err = MailerError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn error_display_covers_address_variant() {
        let addr: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailerError::Address(addr.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
