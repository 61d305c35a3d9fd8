//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod url_registry;

pub use url_registry::UrlRegistry;

#[cfg(test)]
pub use url_registry::MockUrlRegistry;
