//! URL submission and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortUrlEntry;
use crate::domain::repositories::UrlRegistry;
use crate::domain::validator::UrlValidator;
use crate::error::AppError;

/// Service orchestrating validation and registry access.
///
/// Depends only on the domain traits, so both the store and the validator can
/// be substituted (persistent store, deterministic test validator) without
/// touching request-handling logic.
pub struct ShortenerService {
    registry: Arc<dyn UrlRegistry>,
    validator: Arc<dyn UrlValidator>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(registry: Arc<dyn UrlRegistry>, validator: Arc<dyn UrlValidator>) -> Self {
        Self {
            registry,
            validator,
        }
    }

    /// Validates a candidate URL and deduplicates-or-inserts it.
    ///
    /// Resubmitting a known URL returns the stored entry with its original
    /// code; a previously unseen URL gets the next counter value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the candidate fails syntactic or
    /// resolution checks, [`AppError::Internal`] on store errors.
    pub async fn shorten(&self, original_url: String) -> Result<ShortUrlEntry, AppError> {
        if !self.validator.validate(&original_url).await {
            return Err(AppError::InvalidUrl);
        }

        self.registry.submit(original_url).await
    }

    /// Retrieves the entry for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this code,
    /// [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, short_url: u64) -> Result<ShortUrlEntry, AppError> {
        self.registry
            .resolve(short_url)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRegistry;
    use crate::domain::validator::MockUrlValidator;

    fn service(registry: MockUrlRegistry, validator: MockUrlValidator) -> ShortenerService {
        ShortenerService::new(Arc::new(registry), Arc::new(validator))
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url_without_touching_registry() {
        let registry = MockUrlRegistry::new();
        let mut validator = MockUrlValidator::new();
        validator.expect_validate().return_const(false);

        // No expectation on the registry: any submit call would panic.
        let result = service(registry, validator)
            .shorten("not a url".to_string())
            .await;

        assert_eq!(result, Err(AppError::InvalidUrl));
    }

    #[tokio::test]
    async fn test_shorten_submits_valid_url() {
        let mut registry = MockUrlRegistry::new();
        registry
            .expect_submit()
            .withf(|url| url == "https://example.com")
            .returning(|url| Ok(ShortUrlEntry::new(url, 1)));

        let mut validator = MockUrlValidator::new();
        validator.expect_validate().return_const(true);

        let entry = service(registry, validator)
            .shorten("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(entry.short_url, 1);
        assert_eq!(entry.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_maps_missing_entry_to_not_found() {
        let mut registry = MockUrlRegistry::new();
        registry.expect_resolve().returning(|_| Ok(None));
        let validator = MockUrlValidator::new();

        let result = service(registry, validator).resolve(9999).await;

        assert_eq!(result, Err(AppError::NotFound));
    }

    #[tokio::test]
    async fn test_resolve_returns_stored_entry() {
        let mut registry = MockUrlRegistry::new();
        registry
            .expect_resolve()
            .withf(|&code| code == 3)
            .returning(|code| Ok(Some(ShortUrlEntry::new("https://example.com", code))));
        let validator = MockUrlValidator::new();

        let entry = service(registry, validator).resolve(3).await.unwrap();

        assert_eq!(entry.short_url, 3);
    }
}
