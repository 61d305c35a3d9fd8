//! HTTP API layer.
//!
//! - [`dto`] - Request and response data structures
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
