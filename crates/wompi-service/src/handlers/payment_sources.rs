//! Payment source handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use wompi_client::{sandbox, CardTokenRequest, NequiTokenRequest, PaymentSource, PaymentSourceId};

use crate::error::ApiError;
use crate::state::AppState;

/// Response of the payment-source creation routes.
#[derive(Debug, Serialize)]
pub struct PaymentSourceResponse {
    /// The registered payment source.
    pub payment_source: PaymentSource,
}

/// Register the sandbox Nequi number as a payment source.
pub async fn create_nequi_source(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PaymentSourceResponse>, ApiError> {
    let payment_source = state
        .wompi
        .register_nequi_source(&NequiTokenRequest::sandbox(), sandbox::CUSTOMER_EMAIL)
        .await?;

    Ok(Json(PaymentSourceResponse { payment_source }))
}

/// Register the sandbox card as a payment source.
pub async fn create_card_source(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PaymentSourceResponse>, ApiError> {
    let payment_source = state
        .wompi
        .register_card_source(&CardTokenRequest::sandbox(), sandbox::CUSTOMER_EMAIL)
        .await?;

    Ok(Json(PaymentSourceResponse { payment_source }))
}

/// Get a stored payment source. The remote body is returned as received.
pub async fn get_payment_source(
    State(state): State<Arc<AppState>>,
    Path(payment_source_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id: PaymentSourceId = payment_source_id
        .parse()
        .map_err(|e: wompi_client::IdError| ApiError::InvalidRequest(e.to_string()))?;

    let response = state.wompi.get_payment_source_as(id).await?;
    Ok(Json(response.data))
}
