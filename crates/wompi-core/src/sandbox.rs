//! Sandbox fixtures.
//!
//! Test card numbers, Nequi phone numbers and a demo customer accepted by
//! the sandbox environment. The outcome of a sandbox transaction depends on
//! which of these values is used.

/// Sandbox card numbers.
pub mod cards {
    /// Card that produces approved transactions.
    pub const APPROVED: &str = "4242424242424242";
    /// Card that produces declined transactions.
    pub const DECLINED: &str = "4111111111111111";
}

/// Sandbox Nequi phone numbers.
pub mod nequi {
    /// Phone number that produces approved transactions.
    pub const APPROVED: &str = "3991111111";
    /// Phone number that produces declined transactions.
    pub const DECLINED: &str = "3992222222";
    /// Phone number that produces errored transactions.
    pub const ERROR: &str = "3107654321";
}

/// Demo customer email used for every sandbox payment.
pub const CUSTOMER_EMAIL: &str = "pepito_perez@example.com";

/// Expiration month sent with the sandbox card.
pub const CARD_EXP_MONTH: &str = "06";

/// Expiration year sent with the sandbox card.
pub const CARD_EXP_YEAR: &str = "29";

/// Security code sent with the sandbox card.
pub const CARD_CVC: &str = "123";

/// Card holder sent with the sandbox card.
pub const CARD_HOLDER: &str = "Pedro Pérez";
