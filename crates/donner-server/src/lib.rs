//! # donner-server
//!
//! HTTP front end for the Donner Summit road-status engine: retrieves the
//! Caltrans I-80 page, strips markup, classifies it with `donner-analysis`
//! and serves the verdict as JSON.

pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod html;
pub mod middleware;
pub mod response;
pub mod state;

use donner_core::DonnerConfig;
use tracing::info;

pub use errors::{FetchError, ServerError};
pub use fetch::{AdvisorySource, CaltransClient, FetchedAdvisory};
pub use handlers::router;
pub use html::strip_html;
pub use response::StatusResponse;
pub use state::AppState;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: DonnerConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(&config)?;
    let addr = config.server.effective_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        target: "donner::http",
        addr = %addr,
        pack = state.analyzer.pack_name(),
        upstream = state.client.base_url(),
        "listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(target: "donner::http", "shutdown requested");
    }
}
