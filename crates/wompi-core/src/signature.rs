//! Integrity signatures.
//!
//! The remote API recomputes the signature over the same concatenation and
//! rejects the transaction unless both hex digests are byte-identical.

use sha2::{Digest, Sha256};

/// Compute SHA-256 of `input` and return the lowercase hex digest (64 characters).
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(digest)
}

/// Compute the integrity signature for a transaction.
///
/// The signed value is `reference || amount_in_cents || currency || secret`
/// with no separators.
#[must_use]
pub fn integrity_signature(
    reference: &str,
    amount_in_cents: u64,
    currency: &str,
    secret: &str,
) -> String {
    sha256_hex(&format!("{reference}{amount_in_cents}{currency}{secret}"))
}
