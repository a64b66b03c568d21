//! Route table.

pub mod connectivity;
pub mod status;

use axum::routing::get;
use axum::Router;

use crate::middleware::logging::log_requests;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status::get_status))
        .route("/api/test", get(connectivity::get_connectivity))
        .route("/healthz", get(healthz))
        .layer(axum::middleware::from_fn(log_requests))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
