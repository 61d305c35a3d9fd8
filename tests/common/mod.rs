#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use shorturl::application::services::ShortenerService;
use shorturl::domain::validator::UrlValidator;
use shorturl::infrastructure::dns::web_url_host;
use shorturl::infrastructure::persistence::InMemoryRegistry;
use shorturl::state::AppState;

/// Deterministic validator for integration tests.
///
/// Runs the same syntactic phase as production but replaces real DNS with a
/// configurable set of hostnames that fail to resolve.
pub struct StubValidator {
    unresolvable_hosts: Vec<String>,
}

impl StubValidator {
    pub fn new() -> Self {
        Self {
            unresolvable_hosts: Vec::new(),
        }
    }

    pub fn with_unresolvable_host(host: &str) -> Self {
        Self {
            unresolvable_hosts: vec![host.to_string()],
        }
    }
}

#[async_trait]
impl UrlValidator for StubValidator {
    async fn validate(&self, candidate: &str) -> bool {
        match web_url_host(candidate) {
            Some(host) => !self.unresolvable_hosts.contains(&host),
            None => false,
        }
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with_validator(StubValidator::new())
}

pub fn create_test_state_with_validator(validator: StubValidator) -> AppState {
    let registry = Arc::new(InMemoryRegistry::new());
    let shortener = Arc::new(ShortenerService::new(registry, Arc::new(validator)));
    AppState::new(shortener)
}
