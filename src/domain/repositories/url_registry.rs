//! Registry trait for short URL data access.

use crate::domain::entities::ShortUrlEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Registry interface for the short URL store.
///
/// Owns the ordered collection of entries and the next-code counter. Handlers
/// and services depend only on this trait so the in-memory store can be
/// swapped for a persistent one without touching request-handling logic.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRegistry`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRegistry: Send + Sync {
    /// Deduplicates-or-inserts a URL.
    ///
    /// If an entry with exactly this `original_url` already exists the stored
    /// entry is returned unchanged, reusing its code. Otherwise the current
    /// counter value is assigned as the new entry's code and the counter is
    /// incremented.
    ///
    /// The caller is responsible for validating the URL first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn submit(&self, original_url: String) -> Result<ShortUrlEntry, AppError>;

    /// Finds an entry by its numeric short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrlEntry))` if found
    /// - `Ok(None)` if no entry has this code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn resolve(&self, short_url: u64) -> Result<Option<ShortUrlEntry>, AppError>;
}
