//! Fallback handler for unmatched routes.

use crate::error::AppError;

/// Returns the endpoint-not-found error for any unmatched path.
///
/// This is the one error the service reports with a non-200 status (404).
pub async fn not_found_handler() -> AppError {
    AppError::EndpointNotFound
}
