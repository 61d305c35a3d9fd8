//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                          - Service description
//! - `POST /api/shorturl`              - Create short URL
//! - `GET  /api/shorturl/{short_url}`  - Redirect to original URL
//! - any other path or method          - 404 endpoint-not-found body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{not_found_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
