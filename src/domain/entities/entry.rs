//! Entry entity representing a shortened URL mapping.

use serde::Serialize;

/// A shortened URL entry.
///
/// Maps a monotonically assigned numeric short code to the original URL
/// exactly as it was submitted. Entries are immutable once created and live
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortUrlEntry {
    pub original_url: String,
    pub short_url: u64,
}

impl ShortUrlEntry {
    /// Creates a new entry.
    pub fn new(original_url: impl Into<String>, short_url: u64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }
}
