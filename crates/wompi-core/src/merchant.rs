//! Merchant records and acceptance tokens.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Merchant record as returned by `GET /merchants/{public_key}`.
///
/// Only the fields this crate reads are typed; everything else is kept in
/// `extra` so the record can be handed back to callers unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Merchant {
    /// Merchant display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Public key the record was fetched with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// End-user terms and conditions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presigned_acceptance: Option<PresignedAcceptance>,
    /// Personal data processing authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presigned_personal_data_auth: Option<PresignedAcceptance>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A consent document the payer implicitly accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresignedAcceptance {
    /// Token proving acceptance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_token: Option<String>,
    /// Link to the document users should be able to read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// Document kind (e.g. `END_USER_POLICY`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The two consent tokens every transaction and payment source needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceTokens {
    /// Terms and conditions token.
    pub acceptance_token: String,
    /// Personal data processing token.
    pub accept_personal_auth: String,
}

impl AcceptanceTokens {
    /// Extract both tokens from a merchant record.
    ///
    /// Empty strings count as missing.
    pub fn from_merchant(merchant: &Merchant) -> Result<Self> {
        let acceptance_token = token_of(merchant.presigned_acceptance.as_ref())
            .ok_or_else(|| CoreError::not_found("acceptance token"))?;
        let accept_personal_auth = token_of(merchant.presigned_personal_data_auth.as_ref())
            .ok_or_else(|| CoreError::not_found("personal data auth token"))?;

        Ok(Self {
            acceptance_token,
            accept_personal_auth,
        })
    }
}

fn token_of(acceptance: Option<&PresignedAcceptance>) -> Option<String> {
    acceptance
        .and_then(|a| a.acceptance_token.as_deref())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
