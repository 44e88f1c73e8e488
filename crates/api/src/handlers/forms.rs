//! Handlers for the newsletter signup and contact form.
//!
//! Both endpoints share the same shape: per-IP rate limit first, then the
//! schema check, then the forward to the mailer. Rate limiting precedes
//! validation, so rejected-as-invalid submissions still consume the
//! window.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use qlk_core::forms::{
    validate_source, MESSAGE_MAX_LENGTH, MESSAGE_MIN_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
    SUBJECT_MAX_LENGTH, SUBJECT_MIN_LENGTH,
};
use qlk_mailer::{ContactMessage, NewsletterSignup};

use crate::client_ip::ClientIp;
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Public response when the welcome email cannot be sent.
const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again later.";

/// Public response when the contact forward cannot be sent.
const CONTACT_FAILED: &str = "Failed to send message. Please try again later.";

// ---------------------------------------------------------------------------
// POST /newsletter
// ---------------------------------------------------------------------------

/// Newsletter signup payload.
#[derive(Debug, Deserialize, Validate)]
pub struct NewsletterPayload {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(
        min = NAME_MIN_LENGTH,
        max = NAME_MAX_LENGTH,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: Option<String>,
    #[validate(custom(function = validate_source))]
    pub source: Option<String>,
}

/// Subscribe an email address to the newsletter.
pub async fn subscribe(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    payload: Result<Json<NewsletterPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    if !state.rate_limiter.check(&ip) {
        tracing::warn!(%ip, "Newsletter signup rate limited");
        return Err(AppError::RateLimited);
    }

    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    payload.validate().map_err(AppError::Validation)?;

    let signup = NewsletterSignup {
        email: payload.email,
        name: payload.name,
        source: payload.source,
    };
    state
        .mailer
        .send_newsletter_welcome(&signup)
        .await
        .map_err(|error| AppError::Delivery(SUBSCRIBE_FAILED, error))?;

    tracing::info!(email = %signup.email, "Newsletter signup accepted");
    Ok(Json(MessageResponse {
        message: "Successfully subscribed to newsletter!",
    }))
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Contact form payload.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactPayload {
    #[validate(length(
        min = NAME_MIN_LENGTH,
        max = NAME_MAX_LENGTH,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(
        min = SUBJECT_MIN_LENGTH,
        max = SUBJECT_MAX_LENGTH,
        message = "Subject must be between 3 and 150 characters"
    ))]
    pub subject: String,
    #[validate(length(
        min = MESSAGE_MIN_LENGTH,
        max = MESSAGE_MAX_LENGTH,
        message = "Message must be between 10 and 5000 characters"
    ))]
    pub message: String,
}

/// Forward a contact form submission to the band inbox.
pub async fn contact(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    if !state.rate_limiter.check(&ip) {
        tracing::warn!(%ip, "Contact submission rate limited");
        return Err(AppError::RateLimited);
    }

    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    payload.validate().map_err(AppError::Validation)?;

    let message = ContactMessage {
        name: payload.name,
        email: payload.email,
        subject: payload.subject,
        message: payload.message,
    };
    state
        .mailer
        .send_contact(&message)
        .await
        .map_err(|error| AppError::Delivery(CONTACT_FAILED, error))?;

    tracing::info!(from = %message.email, "Contact submission accepted");
    Ok(Json(MessageResponse {
        message: "Message sent! We'll get back to you soon.",
    }))
}
