//! Validator trait for candidate URL checking.

use async_trait::async_trait;

/// Validates a candidate string before it may enter the registry.
///
/// The check is asynchronous because the production implementation performs a
/// DNS lookup. The contract is boolean and fails closed: any parse error or
/// resolution failure yields `false`, never an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::DnsValidator`] - syntax check plus hostname resolution
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlValidator: Send + Sync {
    /// Returns `true` when `candidate` is a well-formed http/https URL whose
    /// hostname resolves.
    async fn validate(&self, candidate: &str) -> bool;
}
