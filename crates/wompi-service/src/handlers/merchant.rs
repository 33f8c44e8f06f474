//! Merchant handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::state::AppState;

/// Fetch the configured merchant, including its acceptance documents.
///
/// The remote body is returned as received.
pub async fn get_merchant(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let response = state
        .wompi
        .get_merchant_as(&state.config.public_key)
        .await?;
    Ok(Json(response.data))
}
