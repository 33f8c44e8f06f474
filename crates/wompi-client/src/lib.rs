//! Wompi Client SDK.
//!
//! Two independently configured clients:
//!
//! - [`WompiClient`] for the payments API, authenticated with the merchant's
//!   private key as a bearer token. Calls return the full [`ApiResponse`].
//! - [`PayoutsClient`] for the payouts API, authenticated with `x-api-key`
//!   and `user-principal-id` headers. Calls return the decoded body only.
//!
//! On top of the payments client sit the transaction and payment-source
//! flows (acceptance tokens, payment-source resolution, signing).
//!
//! # Example
//!
//! ```no_run
//! use wompi_client::{TransactionParams, WompiClient};
//!
//! # async fn example() -> Result<(), wompi_client::ClientError> {
//! let client = WompiClient::new(
//!     "https://sandbox.wompi.co/v1",
//!     "prv_test_...",
//!     "pub_test_...",
//! )?;
//!
//! let params = TransactionParams {
//!     amount_in_cents: Some(2_500_000),
//!     payment_source_id: Some(181_387),
//!     recurrent: false,
//!     customer_email: "pepito_perez@example.com".to_string(),
//! };
//!
//! let response = client.checkout(&params, "test_integrity_...").await?;
//! println!("status: {}", response.status);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod checkout;
mod client;
mod error;
mod options;
mod payouts;
mod transport;

pub use checkout::TransactionParams;
pub use client::WompiClient;
pub use error::ClientError;
pub use options::{ApiResponse, ClientOptions, RequestOptions};
pub use payouts::PayoutsClient;
pub use reqwest::Method;
pub use wompi_core::{
    integrity_signature, sandbox, sha256_hex, AcceptanceTokens, CardToken, CardTokenRequest,
    CoreError, Envelope, IdError, Merchant, NequiToken, NequiTokenRequest, NewPaymentSource,
    PaymentInstruction, PaymentSource, PaymentSourceId, PaymentSourceType, PresignedAcceptance,
    Transaction, TransactionNew, TransactionReference, DEFAULT_AMOUNT_IN_CENTS, DEFAULT_CURRENCY,
};
