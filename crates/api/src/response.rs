//! Shared response envelope types for API handlers.
//!
//! Content endpoints use a `{ "data": ... }` envelope; the form endpoints
//! return `{ "message": ... }` on success. Use these instead of ad-hoc
//! `serde_json::json!` for compile-time type safety and consistent
//! serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "message": ... }` success response for form submissions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
