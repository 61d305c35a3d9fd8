//! Application error type and its HTTP mapping.
//!
//! The wire contract is inherited from the original service: every error is a
//! JSON object `{ "error": <message> }`. Validation-class failures are
//! reported with HTTP 200 and distinguished only by the message; the only
//! non-200 statuses are 404 for unmatched routes and 500 for store failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by handlers and services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Missing `url` field, malformed syntax, or unresolvable hostname.
    #[error("invalid url")]
    InvalidUrl,

    /// Short code path parameter is not an integer.
    #[error("Wrong format")]
    WrongFormat,

    /// No entry exists for the requested short code.
    #[error("No short URL found for the given input")]
    NotFound,

    /// Route did not match any endpoint.
    #[error("Endpoint not found")]
    EndpointNotFound,

    /// Store failure. Unreachable with the in-memory registry; kept for
    /// persistent [`crate::domain::repositories::UrlRegistry`] implementations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::EndpointNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(reason) => {
                tracing::error!("internal error: {reason}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            // Validation-class failures keep HTTP 200; clients key off the body.
            _ => (StatusCode::OK, self.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(AppError::InvalidUrl.to_string(), "invalid url");
        assert_eq!(AppError::WrongFormat.to_string(), "Wrong format");
        assert_eq!(
            AppError::NotFound.to_string(),
            "No short URL found for the given input"
        );
        assert_eq!(AppError::EndpointNotFound.to_string(), "Endpoint not found");
    }
}
