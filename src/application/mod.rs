//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating validation and
//! registry calls. Services consume the domain traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - URL submission and lookup

pub mod services;
