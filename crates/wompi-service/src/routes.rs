//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, merchant, payment_sources, payouts, transactions, webhooks};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Payments
/// - `GET /merchant` - Merchant and acceptance documents
/// - `GET /transaction` - Create a transaction (`amount`, `payment_source_id`, `recurrent`)
/// - `GET /transaction/:transaction_id` - Get a transaction
/// - `GET /payment-source/nequi` - Register the sandbox Nequi account
/// - `GET /payment-source/card` - Register the sandbox card
/// - `GET /payment-source/:payment_source_id` - Get a payment source
///
/// ## Payouts
/// - `GET /banks`, `GET /accounts`, `GET /limits`, `GET /payouts`, `GET /payouts/:payout_id`
///
/// ## Webhooks (not verified)
/// - `POST /webhook`
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;

    let state = Arc::new(state);

    Router::new()
        // Health
        .route("/health", get(health::health))
        // Payments
        .route("/merchant", get(merchant::get_merchant))
        .route("/transaction", get(transactions::create_transaction))
        .route(
            "/transaction/:transaction_id",
            get(transactions::get_transaction),
        )
        .route(
            "/payment-source/nequi",
            get(payment_sources::create_nequi_source),
        )
        .route(
            "/payment-source/card",
            get(payment_sources::create_card_source),
        )
        .route(
            "/payment-source/:payment_source_id",
            get(payment_sources::get_payment_source),
        )
        // Payouts
        .route("/banks", get(payouts::list_banks))
        .route("/accounts", get(payouts::list_accounts))
        .route("/limits", get(payouts::get_limits))
        .route("/payouts", get(payouts::list_payouts))
        .route("/payouts/:payout_id", get(payouts::get_payout))
        // Webhooks
        .route("/webhook", post(webhooks::webhook))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

/// CORS for browser demos: `*` allows any origin, otherwise only the listed
/// ones. Unparseable origins are skipped with a warning.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| {
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            }
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
