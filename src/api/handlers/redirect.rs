//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// The path parameter is extracted as a string and parsed strictly: anything
/// that is not a plain non-negative integer is the `Wrong format` error,
/// which is distinct from the not-found error for unassigned codes.
///
/// # Errors
///
/// - `{"error":"Wrong format"}` when the parameter is not an integer
/// - `{"error":"No short URL found for the given input"}` when no entry
///   matches the code
///
/// Both are delivered with HTTP 200 per the service's wire contract.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let code: u64 = short_url.parse().map_err(|_| AppError::WrongFormat)?;

    let entry = state.shortener.resolve(code).await?;

    tracing::debug!(code, target = %entry.original_url, "redirecting");
    Ok(Redirect::temporary(&entry.original_url))
}
