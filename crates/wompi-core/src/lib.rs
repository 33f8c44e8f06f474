//! Core types and utilities for the Wompi payments client.
//!
//! This crate provides the foundational types shared by the client and the
//! example service:
//!
//! - **Identifiers**: `TransactionReference`, `PaymentSourceId`
//! - **Merchants**: `Merchant`, `PresignedAcceptance`, `AcceptanceTokens`
//! - **Payment sources**: `PaymentSource`, `PaymentSourceType`, token requests
//! - **Transactions**: `TransactionNew`, `PaymentInstruction`, `Transaction`
//! - **Signatures**: `integrity_signature`, `sha256_hex`
//!
//! # Amounts
//!
//! Amounts are always expressed in minor currency units (`amount_in_cents`)
//! and stored as `u64`. For COP, `2_500_000` cents is 25 000 pesos.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod envelope;
pub mod error;
pub mod ids;
pub mod merchant;
pub mod payment_source;
pub mod sandbox;
pub mod signature;
pub mod transaction;

pub use envelope::Envelope;
pub use error::{CoreError, Result};
pub use ids::{IdError, PaymentSourceId, TransactionReference};
pub use merchant::{AcceptanceTokens, Merchant, PresignedAcceptance};
pub use payment_source::{
    CardToken, CardTokenRequest, NequiToken, NequiTokenRequest, NewPaymentSource, PaymentSource,
    PaymentSourceType,
};
pub use signature::{integrity_signature, sha256_hex};
pub use transaction::{
    PaymentInstruction, Transaction, TransactionNew, DEFAULT_AMOUNT_IN_CENTS, DEFAULT_CURRENCY,
    DEFAULT_INSTALLMENTS,
};
