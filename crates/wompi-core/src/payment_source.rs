//! Payment sources and the tokens they are registered from.
//!
//! A payment source is created in two steps: raw payment details are
//! tokenized (`POST /tokens/cards` or `POST /tokens/nequi`), then the token
//! is registered with `POST /payment_sources`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::merchant::AcceptanceTokens;
use crate::sandbox;

/// Discriminant of a stored payment source.
///
/// Values this crate does not branch on are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentSourceType {
    /// Credit or debit card.
    Card,
    /// Nequi mobile wallet.
    Nequi,
    /// Any other remote type.
    Other(String),
}

impl PaymentSourceType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Card => "CARD",
            Self::Nequi => "NEQUI",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for PaymentSourceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CARD" => Self::Card,
            "NEQUI" => Self::Nequi,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentSourceType> for String {
    fn from(kind: PaymentSourceType) -> Self {
        match kind {
            PaymentSourceType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored payment source as returned by `/payment_sources`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSource {
    /// Numeric id.
    pub id: u64,
    /// Source type.
    #[serde(rename = "type")]
    pub kind: PaymentSourceType,
    /// Status (e.g. `AVAILABLE`, `PENDING`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Owner email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Remaining fields (`public_data`, `token`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PaymentSource {
    /// Whether this source is a card.
    #[must_use]
    pub fn is_card(&self) -> bool {
        self.kind == PaymentSourceType::Card
    }
}

/// Body of `POST /payment_sources`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPaymentSource {
    /// Type of the tokenized method.
    #[serde(rename = "type")]
    pub kind: PaymentSourceType,
    /// Token id returned by the tokenize call.
    pub token: String,
    /// Owner email.
    pub customer_email: String,
    /// Consent tokens.
    #[serde(flatten)]
    pub acceptance: AcceptanceTokens,
}

/// Body of `POST /tokens/cards`.
#[derive(Debug, Clone, Serialize)]
pub struct CardTokenRequest {
    /// Card number without spaces.
    pub number: String,
    /// Security code (3 or 4 digits).
    pub cvc: String,
    /// Two-digit expiration month.
    pub exp_month: String,
    /// Two-digit expiration year.
    pub exp_year: String,
    /// Card holder name (at least 5 characters).
    pub card_holder: String,
}

impl CardTokenRequest {
    /// The approved sandbox card.
    #[must_use]
    pub fn sandbox() -> Self {
        Self {
            number: sandbox::cards::APPROVED.to_string(),
            cvc: sandbox::CARD_CVC.to_string(),
            exp_month: sandbox::CARD_EXP_MONTH.to_string(),
            exp_year: sandbox::CARD_EXP_YEAR.to_string(),
            card_holder: sandbox::CARD_HOLDER.to_string(),
        }
    }
}

/// Body of `POST /tokens/nequi`.
#[derive(Debug, Clone, Serialize)]
pub struct NequiTokenRequest {
    /// Nequi account phone number.
    pub phone_number: String,
}

impl NequiTokenRequest {
    /// The approved sandbox Nequi number.
    #[must_use]
    pub fn sandbox() -> Self {
        Self {
            phone_number: sandbox::nequi::APPROVED.to_string(),
        }
    }
}

/// Tokenized card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardToken {
    /// Token id (`tok_...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Card brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Last four digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Tokenized Nequi account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NequiToken {
    /// Token id (`nequi_...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Token status (`PENDING` until the user approves in the app).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Phone number the token was issued for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
