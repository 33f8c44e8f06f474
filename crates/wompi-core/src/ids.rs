//! Identifier types.
//!
//! `TransactionReference` is the merchant-side reference attached to every
//! transaction. It is generated fresh per request and is part of the
//! integrity signature, so it is kept as an opaque string.
//!
//! `PaymentSourceId` is the numeric id the remote API assigns to a stored
//! payment source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The value is not a positive integer.
    #[error("invalid payment source id: {0:?}")]
    InvalidPaymentSourceId(String),

    /// The reference is empty.
    #[error("transaction reference must not be empty")]
    EmptyReference,
}

/// Merchant reference for a single transaction attempt.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionReference(String);

impl TransactionReference {
    /// Generate a new collision-resistant reference (random UUID, simple form).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Return the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TransactionReference {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::EmptyReference);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for TransactionReference {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(IdError::EmptyReference);
        }
        Ok(Self(value))
    }
}

impl From<TransactionReference> for String {
    fn from(reference: TransactionReference) -> Self {
        reference.0
    }
}

impl fmt::Debug for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionReference({})", self.0)
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric id of a stored payment source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentSourceId(u64);

impl PaymentSourceId {
    /// Wrap a raw id. Returns `None` for zero, which the remote API never issues.
    #[must_use]
    pub const fn new(id: u64) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Return the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for PaymentSourceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| IdError::InvalidPaymentSourceId(s.to_string()))
    }
}

impl fmt::Display for PaymentSourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_references_are_unique() {
        let a = TransactionReference::generate();
        let b = TransactionReference::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn reference_rejects_empty() {
        assert_eq!(
            "".parse::<TransactionReference>(),
            Err(IdError::EmptyReference)
        );
        let parsed: TransactionReference = "order-42".parse().unwrap();
        assert_eq!(parsed.to_string(), "order-42");
    }

    #[test]
    fn reference_serializes_as_plain_string() {
        let reference: TransactionReference = "ref-1".parse().unwrap();
        assert_eq!(serde_json::to_string(&reference).unwrap(), "\"ref-1\"");
    }

    #[test]
    fn payment_source_id_parsing() {
        assert_eq!(
            "181387".parse::<PaymentSourceId>().unwrap().get(),
            181_387
        );
        assert_eq!(" 7 ".parse::<PaymentSourceId>().unwrap().get(), 7);
        assert!("0".parse::<PaymentSourceId>().is_err());
        assert!("-3".parse::<PaymentSourceId>().is_err());
        assert!("card".parse::<PaymentSourceId>().is_err());
    }

    #[test]
    fn payment_source_id_zero_is_none() {
        assert!(PaymentSourceId::new(0).is_none());
        assert_eq!(PaymentSourceId::new(5).map(PaymentSourceId::get), Some(5));
    }
}
