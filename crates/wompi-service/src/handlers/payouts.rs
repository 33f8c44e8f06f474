//! Payouts passthrough handlers.
//!
//! Bodies are returned exactly as the payouts API sent them.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use wompi_client::RequestOptions;

use crate::error::ApiError;
use crate::state::AppState;

/// List supported banks. Authenticates with the merchant public key.
pub async fn list_banks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let options = RequestOptions::new().bearer(&state.config.public_key);
    Ok(Json(state.payouts.list_banks(options).await?))
}

/// List payout accounts. Authenticates with the merchant public key.
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let options = RequestOptions::new().bearer(&state.config.public_key);
    Ok(Json(state.payouts.list_accounts(options).await?))
}

/// Get payout limits.
pub async fn get_limits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(state.payouts.get_limits(RequestOptions::new()).await?))
}

/// List payouts.
pub async fn list_payouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(state.payouts.list_payouts(RequestOptions::new()).await?))
}

/// Get a payout by id.
pub async fn get_payout(
    State(state): State<Arc<AppState>>,
    Path(payout_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(
        state
            .payouts
            .get_payout(&payout_id, RequestOptions::new())
            .await?,
    ))
}
