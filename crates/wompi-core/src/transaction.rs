//! Transaction requests and records.
//!
//! A [`TransactionNew`] always carries the same core fields. What varies is
//! how the payer pays, which is modelled by [`PaymentInstruction`]:
//!
//! | Instruction | `payment_source_id` | `payment_method` | `recurrent` |
//! |---|---|---|---|
//! | `StoredCard` | yes | `{installments}` | `true` only when requested |
//! | `StoredSource` | yes | absent | absent |
//! | `Wallet` | absent | `{type: "NEQUI", phone_number}` | absent |

use serde::{Deserialize, Serialize};

use crate::ids::{PaymentSourceId, TransactionReference};
use crate::merchant::AcceptanceTokens;
use crate::payment_source::PaymentSource;
use crate::signature::integrity_signature;

/// Amount used when the caller does not give one (25 000 COP).
pub const DEFAULT_AMOUNT_IN_CENTS: u64 = 2_500_000;

/// Currency of every transaction created by this crate.
pub const DEFAULT_CURRENCY: &str = "COP";

/// Installments attached to stored card payments.
pub const DEFAULT_INSTALLMENTS: u32 = 1;

/// How a transaction is paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInstruction {
    /// A stored card. Cards require an installment count.
    StoredCard {
        /// Stored source id.
        payment_source_id: PaymentSourceId,
        /// Number of installments.
        installments: u32,
        /// Card-on-file recurring charge.
        recurrent: bool,
    },
    /// A stored non-card source (e.g. a Nequi account).
    StoredSource {
        /// Stored source id.
        payment_source_id: PaymentSourceId,
    },
    /// An ad-hoc Nequi wallet payment.
    Wallet {
        /// Nequi phone number.
        phone_number: String,
    },
}

impl PaymentInstruction {
    /// Choose the instruction for a resolved stored source.
    ///
    /// `recurrent` only has an effect for cards.
    #[must_use]
    pub fn for_stored_source(
        payment_source_id: PaymentSourceId,
        source: &PaymentSource,
        recurrent: bool,
    ) -> Self {
        if source.is_card() {
            Self::StoredCard {
                payment_source_id,
                installments: DEFAULT_INSTALLMENTS,
                recurrent,
            }
        } else {
            Self::StoredSource { payment_source_id }
        }
    }

    /// An ad-hoc Nequi payment.
    #[must_use]
    pub fn wallet(phone_number: impl Into<String>) -> Self {
        Self::Wallet {
            phone_number: phone_number.into(),
        }
    }

    /// The stored source id, if any.
    #[must_use]
    pub fn payment_source_id(&self) -> Option<PaymentSourceId> {
        match self {
            Self::StoredCard {
                payment_source_id, ..
            }
            | Self::StoredSource { payment_source_id } => Some(*payment_source_id),
            Self::Wallet { .. } => None,
        }
    }
}

/// Body of `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "WireTransaction")]
pub struct TransactionNew {
    /// Consent tokens.
    pub acceptance: AcceptanceTokens,
    /// Amount in minor units.
    pub amount_in_cents: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Merchant reference.
    pub reference: TransactionReference,
    /// Integrity signature over reference, amount, currency and secret.
    pub signature: String,
    /// Payer email.
    pub customer_email: String,
    /// Payment instruction.
    pub payment: PaymentInstruction,
}

impl TransactionNew {
    /// Assemble a transaction and sign it with `integrity_secret`.
    #[must_use]
    pub fn new(
        acceptance: AcceptanceTokens,
        amount_in_cents: u64,
        reference: TransactionReference,
        customer_email: impl Into<String>,
        payment: PaymentInstruction,
        integrity_secret: &str,
    ) -> Self {
        let currency = DEFAULT_CURRENCY.to_string();
        let signature = integrity_signature(
            reference.as_str(),
            amount_in_cents,
            &currency,
            integrity_secret,
        );

        Self {
            acceptance,
            amount_in_cents,
            currency,
            reference,
            signature,
            customer_email: customer_email.into(),
            payment,
        }
    }
}

#[derive(Serialize)]
struct WireTransaction {
    acceptance_token: String,
    accept_personal_auth: String,
    amount_in_cents: u64,
    currency: String,
    signature: String,
    reference: String,
    customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_source_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_method: Option<WirePaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurrent: Option<bool>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePaymentMethod {
    Card {
        installments: u32,
    },
    Nequi {
        #[serde(rename = "type")]
        kind: &'static str,
        phone_number: String,
    },
}

impl From<TransactionNew> for WireTransaction {
    fn from(tx: TransactionNew) -> Self {
        let payment_source_id = tx.payment.payment_source_id().map(PaymentSourceId::get);
        let (payment_method, recurrent) = match tx.payment {
            PaymentInstruction::StoredCard {
                installments,
                recurrent,
                ..
            } => (
                Some(WirePaymentMethod::Card { installments }),
                recurrent.then_some(true),
            ),
            PaymentInstruction::StoredSource { .. } => (None, None),
            PaymentInstruction::Wallet { phone_number } => (
                Some(WirePaymentMethod::Nequi {
                    kind: "NEQUI",
                    phone_number,
                }),
                None,
            ),
        };

        Self {
            acceptance_token: tx.acceptance.acceptance_token,
            accept_personal_auth: tx.acceptance.accept_personal_auth,
            amount_in_cents: tx.amount_in_cents,
            currency: tx.currency,
            signature: tx.signature,
            reference: tx.reference.into(),
            customer_email: tx.customer_email,
            payment_source_id,
            payment_method,
            recurrent,
        }
    }
}

/// Transaction record as returned by `/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: String,
    /// Status (`PENDING`, `APPROVED`, `DECLINED`, `VOIDED`, `ERROR`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Merchant reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Amount in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_cents: Option<u64>,
    /// Currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Payment method type (`CARD`, `NEQUI`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
