//! Wompi example HTTP service.
//!
//! A thin server over the Wompi payments and payouts APIs:
//!
//! - Merchant and acceptance documents
//! - Transaction creation (stored card, stored Nequi, ad-hoc Nequi wallet)
//! - Payment source registration from sandbox card and Nequi data
//! - Payouts passthrough (banks, accounts, limits, payouts)
//! - A webhook stub
//!
//! Every failure answers HTTP 500 with a JSON error envelope; see [`ApiError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for the router

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
