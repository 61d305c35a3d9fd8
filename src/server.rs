//! HTTP server initialization and runtime setup.
//!
//! Wires up the in-memory registry, the DNS validator, and the Axum server
//! lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::dns::DnsValidator;
use crate::infrastructure::persistence::InMemoryRegistry;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// The registry starts empty on every run: short codes restart at 1 and any
/// previously distributed short URLs are invalidated.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(InMemoryRegistry::new());
    let validator = Arc::new(DnsValidator::new(Duration::from_secs(
        config.dns_timeout_secs,
    )));

    let shortener = Arc::new(ShortenerService::new(registry, validator));
    let state = AppState::new(shortener);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("URL shortener listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
