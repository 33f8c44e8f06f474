//! Application state.

use wompi_client::{ClientError, PayoutsClient, WompiClient};

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// Read-only after construction; handlers receive it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Payments API client (private-key bearer).
    pub wompi: WompiClient,

    /// Payouts API client (API key and principal id headers).
    pub payouts: PayoutsClient,
}

impl AppState {
    /// Build both API clients from the configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, ClientError> {
        let wompi = WompiClient::new(
            config.wompi_url.as_str(),
            &config.private_key,
            config.public_key.as_str(),
        )?;
        tracing::info!(wompi_url = %config.wompi_url, "Payments client configured");

        let payouts = PayoutsClient::new(
            config.payouts_url.as_str(),
            config.payouts_api_key.as_deref(),
            config.payouts_user_id.as_deref(),
        )?;
        if config.payouts_api_key.is_none() {
            tracing::warn!("Payouts API key not configured - payouts requests are unauthenticated");
        }
        tracing::info!(payouts_url = %config.payouts_url, "Payouts client configured");

        Ok(Self {
            config,
            wompi,
            payouts,
        })
    }
}
