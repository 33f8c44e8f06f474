//! Liveness check.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Crate name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Whether payouts calls carry an `x-api-key`.
    pub payouts_authenticated: bool,
}

/// Report liveness. Never calls the remote APIs.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        payouts_authenticated: state.config.payouts_api_key.is_some(),
    })
}
