//! DNS-backed URL validator implementation.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::lookup_host;
use url::Url;

use crate::domain::validator::UrlValidator;

/// Extracts the hostname from a candidate string, provided it parses as an
/// absolute http/https URL with a non-empty host. Returns `None` otherwise.
pub fn web_url_host(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return None,
    }

    let host = url.host_str()?;
    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

/// [`UrlValidator`] that checks syntax and then resolves the hostname.
///
/// The two phases reject both garbage strings and syntactically valid URLs
/// pointing at non-existent hosts. Malformed input fails in phase one without
/// any resolution attempt. Resolution runs under a bounded timeout so a slow
/// resolver cannot stall a request indefinitely; results are not cached, so
/// repeated submissions re-resolve every time.
pub struct DnsValidator {
    timeout: Duration,
}

impl DnsValidator {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl UrlValidator for DnsValidator {
    async fn validate(&self, candidate: &str) -> bool {
        let Some(host) = web_url_host(candidate) else {
            return false;
        };

        // lookup_host wants a port; which one is irrelevant for existence.
        match tokio::time::timeout(self.timeout, lookup_host((host.as_str(), 80))).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                tracing::debug!(%host, error = %e, "hostname did not resolve");
                false
            }
            Err(_) => {
                tracing::warn!(%host, timeout_secs = self.timeout.as_secs(), "DNS lookup timed out");
                false
            }
        }
    }
}
