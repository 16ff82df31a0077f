//! Axum-specific error types and mappings.
//!
//! Maps domain `FetchError`s to HTTP status codes and a JSON response body.
//! Tool diagnostics are logged server-side before errors reach this layer;
//! the response body only ever carries the stable display message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use ytgate_core::FetchError;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<FetchError> for HttpError {
    fn from(err: FetchError) -> Self {
        // Display never includes captured stderr, so the message is safe to relay
        match err.suggested_status_code() {
            400 => Self::BadRequest(err.to_string()),
            _ => Self::Internal(err.to_string()),
        }
    }
}
