//! # shorturl
//!
//! A minimal URL-shortening microservice built with Axum.
//!
//! Submitting a long URL returns a numeric short code; requesting that code
//! redirects to the original URL. URLs are validated in two phases (syntax,
//! then hostname resolution) before a code is assigned. Storage is
//! process-local and non-persistent.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and trait seams
//! - **Application Layer** ([`application`]) - Business logic orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and DNS validator
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 cargo run
//!
//! curl -X POST localhost:3000/api/shorturl \
//!   -H 'Content-Type: application/json' \
//!   -d '{"url":"https://www.example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::ShortUrlEntry;
    pub use crate::domain::repositories::UrlRegistry;
    pub use crate::domain::validator::UrlValidator;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
