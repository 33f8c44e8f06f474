//! API handlers.

pub mod health;
pub mod merchant;
pub mod payment_sources;
pub mod payouts;
pub mod transactions;
pub mod webhooks;
