//! `GET /api/status`: fetch the page, strip markup and classify it.
//!
//! Always answers 200. Retrieval failure and internal errors both become an
//! `unknown` body so that clients only ever parse one shape.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use donner_core::errors::DonnerErrorCode;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::errors::ServerError;
use crate::html::strip_html;
use crate::response::{DebugInfo, StatusResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub debug: Option<String>,
}

impl StatusQuery {
    fn wants_debug(&self) -> bool {
        self.debug.as_deref() == Some("true")
    }
}

pub async fn get_status(
    State(state): State<AppState>,
    query: Option<Query<StatusQuery>>,
) -> Response {
    let debug = query.is_some_and(|Query(q)| q.wants_debug());
    let body = match build_status(&state, debug).await {
        Ok(body) => body,
        Err(e) => {
            error!(
                target: "donner::http",
                code = e.error_code(),
                error = %e,
                "status request failed"
            );
            StatusResponse::server_error(&e.to_string(), state.now())
        }
    };

    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
            (header::CACHE_CONTROL, state.cache_control.clone()),
        ],
        Json(body),
    )
        .into_response()
}

/// Fetch the page and classify it. Shared by the endpoint and `donner check`.
pub async fn build_status(state: &AppState, debug: bool) -> Result<StatusResponse, ServerError> {
    let Some(fetched) = state.client.fetch_advisory().await else {
        warn!(target: "donner::http", "no advisory page available");
        return Ok(StatusResponse::unreachable(state.now()));
    };

    let source = fetched.source;
    let raw = fetched.raw;
    let analyzer = Arc::clone(&state.analyzer);
    let sample_len = state.debug_sample_len;

    let (verdict, debug_info) = tokio::task::spawn_blocking(move || {
        let plain = strip_html(&raw);
        if debug {
            let (verdict, trace) = analyzer.analyze_with_trace(&plain);
            let info = DebugInfo {
                raw_length: raw.chars().count(),
                plain_text_length: plain.chars().count(),
                plain_text_sample: plain.chars().take(sample_len).collect(),
                trace,
            };
            (verdict, Some(info))
        } else {
            (analyzer.analyze_text(&plain), None)
        }
    })
    .await?;

    info!(
        target: "donner::http",
        status = %verdict.status,
        source = source.as_str(),
        restriction = verdict.scores.restriction,
        open = verdict.scores.open,
        "classified advisory"
    );

    let response = StatusResponse::analyzed(verdict, source, state.now());
    Ok(match debug_info {
        Some(info) => response.with_debug(info),
        None => response,
    })
}
