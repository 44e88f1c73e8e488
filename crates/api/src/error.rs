use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use qlk_core::error::CoreError;
use qlk_mailer::MailerError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{"error": ...}` with an optional field-keyed `"details"` map for
/// validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `qlk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A payload failed schema validation.
    #[error("Validation failed")]
    Validation(validator::ValidationErrors),

    /// A malformed request (unparseable body, bad parameter).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The client exceeded the per-IP request window.
    #[error("Too many requests")]
    RateLimited,

    /// Email delivery failed; the message is the public response text.
    #[error("Email delivery failed: {0}")]
    Delivery(&'static str, #[source] MailerError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, slug } => (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} '{slug}' not found") }),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, json!({ "error": msg }))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": "An unexpected error occurred." }),
                    )
                }
            },

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "details": field_details(errors),
                }),
            ),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),

            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": "Too many requests. Please try again later." }),
            ),

            AppError::Delivery(public_message, error) => {
                tracing::error!(%error, "Email delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": public_message }),
                )
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An unexpected error occurred." }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten [`validator::ValidationErrors`] into `{field: [messages]}`.
///
/// Uses the rule's message when one is attached, else the rule code, so a
/// failing field always reports at least which rule tripped.
fn field_details(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email address"))]
        email: String,
    }

    #[test]
    fn field_details_prefers_attached_messages() {
        let probe = Probe {
            email: "not-an-email".to_string(),
        };
        let errors = probe.validate().unwrap_err();
        let details = field_details(&errors);
        assert_eq!(details["email"], vec!["Invalid email address".to_string()]);
    }
}
