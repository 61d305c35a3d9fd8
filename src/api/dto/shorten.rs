//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortUrlEntry;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten. Optional so that a missing field reaches
    /// the handler and collapses into the invalid-url error instead of a
    /// rejection from the JSON extractor.
    pub url: Option<String>,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: u64,
}

impl From<ShortUrlEntry> for ShortenResponse {
    fn from(entry: ShortUrlEntry) -> Self {
        Self {
            original_url: entry.original_url,
            short_url: entry.short_url,
        }
    }
}
