//! Transaction and payment-source flows.
//!
//! Each flow is a short, sequential composition of payments API calls. None
//! of them retry, cache or recover: the first failing call fails the flow.

use serde::de::DeserializeOwned;
use wompi_core::{
    sandbox, AcceptanceTokens, CardTokenRequest, Envelope, NequiTokenRequest, NewPaymentSource,
    PaymentInstruction, PaymentSource, PaymentSourceId, PaymentSourceType, Transaction,
    TransactionNew, TransactionReference, DEFAULT_AMOUNT_IN_CENTS,
};

use crate::client::WompiClient;
use crate::error::ClientError;
use crate::options::ApiResponse;

/// Caller input for a new transaction.
#[derive(Debug, Clone)]
pub struct TransactionParams {
    /// Amount in minor units. Defaults to [`DEFAULT_AMOUNT_IN_CENTS`].
    pub amount_in_cents: Option<u64>,
    /// Stored payment source to charge. `None` (or zero) pays with the
    /// sandbox Nequi wallet instead.
    pub payment_source_id: Option<u64>,
    /// Mark the charge as recurring. Only honored for stored cards.
    pub recurrent: bool,
    /// Payer email.
    pub customer_email: String,
}

impl WompiClient {
    /// Fetch the merchant and extract both acceptance tokens.
    ///
    /// Not cached: every call hits the API.
    pub async fn acceptance_tokens(&self) -> Result<AcceptanceTokens, ClientError> {
        let merchant = self
            .get_merchant(self.public_key())
            .await?
            .into_data()
            .into_inner()
            .ok_or_else(|| ClientError::NotFound("merchant".into()))?;

        Ok(AcceptanceTokens::from_merchant(&merchant)?)
    }

    /// Fetch a stored payment source, failing if the record is empty.
    pub async fn resolve_payment_source(
        &self,
        payment_source_id: PaymentSourceId,
    ) -> Result<PaymentSource, ClientError> {
        self.get_payment_source(payment_source_id)
            .await?
            .into_data()
            .into_inner()
            .ok_or_else(|| ClientError::NotFound("payment source".into()))
    }

    /// Build a signed transaction request without submitting it.
    pub async fn prepare_transaction(
        &self,
        params: &TransactionParams,
        integrity_secret: &str,
    ) -> Result<TransactionNew, ClientError> {
        let acceptance = self.acceptance_tokens().await?;

        let reference = TransactionReference::generate();
        let amount_in_cents = params.amount_in_cents.unwrap_or(DEFAULT_AMOUNT_IN_CENTS);

        let payment = match params.payment_source_id.and_then(PaymentSourceId::new) {
            Some(id) => {
                let source = self.resolve_payment_source(id).await?;
                PaymentInstruction::for_stored_source(id, &source, params.recurrent)
            }
            None => PaymentInstruction::wallet(sandbox::nequi::APPROVED),
        };

        tracing::debug!(
            reference = %reference,
            amount_in_cents = %amount_in_cents,
            payment_source_id = ?payment.payment_source_id(),
            "Prepared transaction"
        );

        Ok(TransactionNew::new(
            acceptance,
            amount_in_cents,
            reference,
            params.customer_email.clone(),
            payment,
            integrity_secret,
        ))
    }

    /// Build, sign and submit a transaction.
    pub async fn checkout(
        &self,
        params: &TransactionParams,
        integrity_secret: &str,
    ) -> Result<ApiResponse<Envelope<Transaction>>, ClientError> {
        self.checkout_as(params, integrity_secret).await
    }

    /// Like [`WompiClient::checkout`], decoding the response body as `T`.
    ///
    /// With `T = serde_json::Value` the body is kept exactly as received.
    pub async fn checkout_as<T: DeserializeOwned>(
        &self,
        params: &TransactionParams,
        integrity_secret: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        let transaction = self.prepare_transaction(params, integrity_secret).await?;
        let response = self.create_transaction_as(&transaction).await?;

        tracing::info!(
            reference = %transaction.reference,
            amount_in_cents = %transaction.amount_in_cents,
            status = %response.status.as_u16(),
            "Transaction created"
        );

        Ok(response)
    }

    /// Tokenize a card and register it as a payment source.
    pub async fn register_card_source(
        &self,
        card: &CardTokenRequest,
        customer_email: &str,
    ) -> Result<PaymentSource, ClientError> {
        let acceptance = self.acceptance_tokens().await?;

        let token = self
            .tokenize_card(card)
            .await?
            .into_data()
            .into_inner()
            .and_then(|t| t.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::NotFound("card token".into()))?;

        self.register_source(PaymentSourceType::Card, token, customer_email, acceptance)
            .await
    }

    /// Tokenize a Nequi account and register it as a payment source.
    pub async fn register_nequi_source(
        &self,
        nequi: &NequiTokenRequest,
        customer_email: &str,
    ) -> Result<PaymentSource, ClientError> {
        let acceptance = self.acceptance_tokens().await?;

        let token = self
            .tokenize_nequi(nequi)
            .await?
            .into_data()
            .into_inner()
            .and_then(|t| t.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::NotFound("nequi token".into()))?;

        self.register_source(PaymentSourceType::Nequi, token, customer_email, acceptance)
            .await
    }

    async fn register_source(
        &self,
        kind: PaymentSourceType,
        token: String,
        customer_email: &str,
        acceptance: AcceptanceTokens,
    ) -> Result<PaymentSource, ClientError> {
        let request = NewPaymentSource {
            kind,
            token,
            customer_email: customer_email.to_string(),
            acceptance,
        };

        let source = self
            .create_payment_source(&request)
            .await?
            .into_data()
            .into_inner()
            .ok_or_else(|| ClientError::NotFound("payment source".into()))?;

        tracing::info!(
            payment_source_id = %source.id,
            kind = %source.kind,
            "Payment source registered"
        );

        Ok(source)
    }
}
