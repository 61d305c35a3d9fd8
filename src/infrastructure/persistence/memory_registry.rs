//! Process-local in-memory registry implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::entities::ShortUrlEntry;
use crate::domain::repositories::UrlRegistry;
use crate::error::AppError;

/// In-memory [`UrlRegistry`] backed by an ordered list and a URL index.
///
/// Codes start at 1 and increase by exactly one per new URL, so the list
/// index of an entry is always `code - 1` and code lookup needs no scan.
/// The URL index provides exact-string deduplication (no normalization).
///
/// A single async mutex guards the check-then-append sequence, so concurrent
/// submissions of the same URL cannot duplicate entries or skip codes.
///
/// Nothing here persists: the store empties and the counter restarts at 1 on
/// every process start, invalidating previously distributed short URLs.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    inner: Mutex<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    entries: Vec<ShortUrlEntry>,
    by_url: HashMap<String, usize>,
}

impl InMemoryRegistry {
    /// Creates an empty registry with the counter at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRegistry for InMemoryRegistry {
    async fn submit(&self, original_url: String) -> Result<ShortUrlEntry, AppError> {
        let mut inner = self.inner.lock().await;

        if let Some(&idx) = inner.by_url.get(&original_url) {
            tracing::debug!(code = inner.entries[idx].short_url, "deduplicated submission");
            return Ok(inner.entries[idx].clone());
        }

        let idx = inner.entries.len();
        let code = idx as u64 + 1;
        let entry = ShortUrlEntry::new(original_url.clone(), code);
        inner.by_url.insert(original_url, idx);
        inner.entries.push(entry.clone());

        tracing::debug!(code, "assigned new short code");
        Ok(entry)
    }

    async fn resolve(&self, short_url: u64) -> Result<Option<ShortUrlEntry>, AppError> {
        let inner = self.inner.lock().await;

        // Codes outside the usize range cannot have been assigned.
        let idx = match short_url
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
        {
            Some(idx) => idx,
            None => return Ok(None),
        };

        Ok(inner.entries.get(idx).cloned())
    }
}
