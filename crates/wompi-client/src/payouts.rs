//! Payouts API client.

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::options::{ClientOptions, RequestOptions};
use crate::transport;

/// Payouts API client.
///
/// Unlike [`crate::WompiClient`], calls return only the decoded body.
#[derive(Debug, Clone)]
pub struct PayoutsClient {
    client: Client,
    base_url: String,
}

impl PayoutsClient {
    /// Create a new payouts client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Payouts API base URL
    /// * `api_key` - Value of the `x-api-key` header, if configured
    /// * `user_principal_id` - Value of the `user-principal-id` header, if configured
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<&str>,
        user_principal_id: Option<&str>,
    ) -> Result<Self, ClientError> {
        Self::with_options(
            base_url,
            api_key,
            user_principal_id,
            &ClientOptions::default(),
        )
    }

    /// Create a new payouts client with custom options.
    pub fn with_options(
        base_url: impl Into<String>,
        api_key: Option<&str>,
        user_principal_id: Option<&str>,
        options: &ClientOptions,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            transport::insert_header(&mut headers, "x-api-key", key)?;
        }
        if let Some(id) = user_principal_id {
            transport::insert_header(&mut headers, "user-principal-id", id)?;
        }

        Ok(Self {
            client: transport::build_client(headers, options)?,
            base_url: transport::normalize_base_url(base_url)?,
        })
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against the payouts API and return the decoded body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = transport::send(&self.client, method, &url, options).await?;
        transport::read_json(response).await
    }

    /// List supported banks.
    pub async fn list_banks(
        &self,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.request(Method::GET, "/banks", options).await
    }

    /// List the merchant's payout accounts.
    pub async fn list_accounts(
        &self,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.request(Method::GET, "/accounts", options.query("origin", "wompi"))
            .await
    }

    /// Get payout limits.
    pub async fn get_limits(
        &self,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.request(Method::GET, "/limits", options).await
    }

    /// List payouts.
    pub async fn list_payouts(
        &self,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.request(Method::GET, "/payouts", options).await
    }

    /// Get a payout by id.
    pub async fn get_payout(
        &self,
        payout_id: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.request(Method::GET, &format!("/payouts/{payout_id}"), options)
            .await
    }
}
