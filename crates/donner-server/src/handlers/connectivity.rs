//! `GET /api/test`: reachability of the reference site and both transports.

use axum::extract::State;
use axum::Json;

use crate::response::ConnectivityResponse;
use crate::state::AppState;

pub async fn get_connectivity(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    let report = state.client.probe().await;
    Json(ConnectivityResponse::new(report, state.now()))
}
