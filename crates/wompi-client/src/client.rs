//! Payments API client.

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use wompi_core::{
    CardToken, CardTokenRequest, Envelope, Merchant, NequiToken, NequiTokenRequest,
    NewPaymentSource, PaymentSource, PaymentSourceId, Transaction, TransactionNew,
};

use crate::error::ClientError;
use crate::options::{ApiResponse, ClientOptions, RequestOptions};
use crate::transport;

/// Payments API client.
///
/// Every request carries `Authorization: Bearer <private key>` unless the
/// caller overrides it. Tokenization endpoints require the public key
/// instead, which the typed methods below take care of.
#[derive(Debug, Clone)]
pub struct WompiClient {
    client: Client,
    base_url: String,
    public_key: String,
}

impl WompiClient {
    /// Create a new payments client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API base URL (e.g., `"https://sandbox.wompi.co/v1"`)
    /// * `private_key` - Merchant private key (`prv_...`)
    /// * `public_key` - Merchant public key (`pub_...`)
    pub fn new(
        base_url: impl Into<String>,
        private_key: &str,
        public_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_options(base_url, private_key, public_key, &ClientOptions::default())
    }

    /// Create a new payments client with custom options.
    pub fn with_options(
        base_url: impl Into<String>,
        private_key: &str,
        public_key: impl Into<String>,
        options: &ClientOptions,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        transport::insert_header(&mut headers, "authorization", &format!("Bearer {private_key}"))?;

        Ok(Self {
            client: transport::build_client(headers, options)?,
            base_url: transport::normalize_base_url(base_url)?,
            public_key: public_key.into(),
        })
    }

    /// The merchant public key this client was configured with.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against the payments API and return the full response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = transport::send(&self.client, method, &url, options).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let data = transport::read_json(response).await?;

        Ok(ApiResponse {
            status,
            headers,
            data,
        })
    }

    /// Get a merchant by public key.
    pub async fn get_merchant(
        &self,
        public_key: &str,
    ) -> Result<ApiResponse<Envelope<Merchant>>, ClientError> {
        self.get_merchant_as(public_key).await
    }

    /// Get a merchant by public key, decoding the response body as `T`.
    pub async fn get_merchant_as<T: DeserializeOwned>(
        &self,
        public_key: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.request(
            Method::GET,
            &format!("/merchants/{public_key}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Create a transaction.
    pub async fn create_transaction(
        &self,
        transaction: &TransactionNew,
    ) -> Result<ApiResponse<Envelope<Transaction>>, ClientError> {
        self.create_transaction_as(transaction).await
    }

    /// Create a transaction, decoding the response body as `T`.
    pub async fn create_transaction_as<T: DeserializeOwned>(
        &self,
        transaction: &TransactionNew,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.request(
            Method::POST,
            "/transactions",
            RequestOptions::new().json(transaction)?,
        )
        .await
    }

    /// Get a transaction by id.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<ApiResponse<Envelope<Transaction>>, ClientError> {
        self.get_transaction_as(transaction_id).await
    }

    /// Get a transaction by id, decoding the response body as `T`.
    pub async fn get_transaction_as<T: DeserializeOwned>(
        &self,
        transaction_id: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.request(
            Method::GET,
            &format!("/transactions/{transaction_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Get a stored payment source by id.
    pub async fn get_payment_source(
        &self,
        payment_source_id: PaymentSourceId,
    ) -> Result<ApiResponse<Envelope<PaymentSource>>, ClientError> {
        self.get_payment_source_as(payment_source_id).await
    }

    /// Get a stored payment source by id, decoding the response body as `T`.
    pub async fn get_payment_source_as<T: DeserializeOwned>(
        &self,
        payment_source_id: PaymentSourceId,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.request(
            Method::GET,
            &format!("/payment_sources/{payment_source_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Register a tokenized payment method as a payment source.
    pub async fn create_payment_source(
        &self,
        source: &NewPaymentSource,
    ) -> Result<ApiResponse<Envelope<PaymentSource>>, ClientError> {
        self.request(
            Method::POST,
            "/payment_sources",
            RequestOptions::new().json(source)?,
        )
        .await
    }

    /// Tokenize a card. Authenticates with the public key.
    pub async fn tokenize_card(
        &self,
        card: &CardTokenRequest,
    ) -> Result<ApiResponse<Envelope<CardToken>>, ClientError> {
        self.request(
            Method::POST,
            "/tokens/cards",
            RequestOptions::new().bearer(&self.public_key).json(card)?,
        )
        .await
    }

    /// Tokenize a Nequi account. Authenticates with the public key.
    pub async fn tokenize_nequi(
        &self,
        nequi: &NequiTokenRequest,
    ) -> Result<ApiResponse<Envelope<NequiToken>>, ClientError> {
        self.request(
            Method::POST,
            "/tokens/nequi",
            RequestOptions::new().bearer(&self.public_key).json(nequi)?,
        )
        .await
    }

    /// List the financial institutions available for PSE bank transfers.
    pub async fn list_financial_institutions(
        &self,
    ) -> Result<ApiResponse<Envelope<serde_json::Value>>, ClientError> {
        self.request(
            Method::GET,
            "/pse/financial_institutions",
            RequestOptions::new().bearer(&self.public_key),
        )
        .await
    }
}
