//! Handler for URL submission.

use axum::{Json, extract::State};

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns) the short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com", "short_url": 1 }
/// ```
///
/// Submitting the same URL again returns the same code (idempotent dedup).
///
/// # Errors
///
/// A missing `url` field, a malformed or unresolvable URL, and any store
/// failure all collapse to the `invalid url` error body, delivered with
/// HTTP 200 per the service's wire contract.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let url = payload.url.filter(|u| !u.is_empty());
    let url = url.ok_or(AppError::InvalidUrl)?;

    let entry = state
        .shortener
        .shorten(url)
        .await
        .map_err(|_| AppError::InvalidUrl)?;

    Ok(Json(entry.into()))
}
