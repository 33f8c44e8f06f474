//! Transaction handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use wompi_client::{sandbox, TransactionParams};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw query parameters of `GET /transaction`.
///
/// Everything arrives as text and is coerced by [`TransactionQuery::into_params`].
#[derive(Debug, Default, Deserialize)]
pub struct TransactionQuery {
    /// Amount in minor units.
    pub amount: Option<String>,
    /// Stored payment source id.
    pub payment_source_id: Option<String>,
    /// `"true"` or `"false"`.
    pub recurrent: Option<String>,
}

impl TransactionQuery {
    /// Coerce the raw values into flow parameters.
    ///
    /// Blank numeric values count as absent.
    pub fn into_params(self, customer_email: &str) -> Result<TransactionParams, ApiError> {
        Ok(TransactionParams {
            amount_in_cents: parse_number("amount", self.amount)?,
            payment_source_id: parse_number("payment_source_id", self.payment_source_id)?,
            recurrent: parse_flag("recurrent", self.recurrent)?,
            customer_email: customer_email.to_string(),
        })
    }
}

fn parse_number(name: &str, value: Option<String>) -> Result<Option<u64>, ApiError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            ApiError::InvalidRequest(format!(
                "{name} must be a non-negative integer, got {raw:?}"
            ))
        }),
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool, ApiError> {
    match value.as_deref() {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(ApiError::InvalidRequest(format!(
            "{name} must be \"true\" or \"false\", got {other:?}"
        ))),
    }
}

/// Create a transaction.
///
/// With a `payment_source_id` the stored source is charged; without one the
/// sandbox Nequi wallet is used. The remote body is returned as received.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let params = query.into_params(sandbox::CUSTOMER_EMAIL)?;

    tracing::info!(
        amount_in_cents = ?params.amount_in_cents,
        payment_source_id = ?params.payment_source_id,
        recurrent = %params.recurrent,
        "Creating transaction"
    );

    let response = state
        .wompi
        .checkout_as(&params, &state.config.integrity_secret)
        .await?;

    Ok(Json(response.data))
}

/// Get a transaction by id.
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let response = state.wompi.get_transaction_as(&transaction_id).await?;
    Ok(Json(response.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(amount: Option<&str>, id: Option<&str>, recurrent: Option<&str>) -> TransactionQuery {
        TransactionQuery {
            amount: amount.map(String::from),
            payment_source_id: id.map(String::from),
            recurrent: recurrent.map(String::from),
        }
    }

    #[test]
    fn coerces_numbers_and_flags() {
        let params = query(Some("2500000"), Some("181387"), Some("true"))
            .into_params("a@example.com")
            .unwrap();

        assert_eq!(params.amount_in_cents, Some(2_500_000));
        assert_eq!(params.payment_source_id, Some(181_387));
        assert!(params.recurrent);
        assert_eq!(params.customer_email, "a@example.com");
    }

    #[test]
    fn absent_and_blank_values() {
        let params = TransactionQuery::default().into_params("a@example.com").unwrap();
        assert_eq!(params.amount_in_cents, None);
        assert_eq!(params.payment_source_id, None);
        assert!(!params.recurrent);

        let params = query(Some(" "), Some(""), Some("false"))
            .into_params("a@example.com")
            .unwrap();
        assert_eq!(params.amount_in_cents, None);
        assert_eq!(params.payment_source_id, None);
        assert!(!params.recurrent);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = query(Some("lots"), None, None)
            .into_params("a@example.com")
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_unknown_flag_values() {
        for value in ["TRUE", "1", "yes", ""] {
            let err = query(None, None, Some(value))
                .into_params("a@example.com")
                .unwrap_err();
            assert!(matches!(err, ApiError::InvalidRequest(_)));
        }
    }
}
