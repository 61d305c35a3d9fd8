//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Create (or reuse) a short URL
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
