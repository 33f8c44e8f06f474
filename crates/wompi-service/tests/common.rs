//! Common test utilities for wompi-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wompi_service::{create_router, AppState, ServiceConfig};

pub const PUBLIC_KEY: &str = "pub_test_key";
pub const PRIVATE_KEY: &str = "prv_test_key";
pub const INTEGRITY_SECRET: &str = "test_integrity_secret";
pub const PAYOUTS_API_KEY: &str = "payouts-key";
pub const PAYOUTS_USER_ID: &str = "principal-1";

/// Test harness: the service under test plus mock payments and payouts APIs.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mock payments API.
    pub wompi: MockServer,
    /// Mock payouts API.
    pub payouts: MockServer,
}

impl TestHarness {
    /// Create a new test harness with fresh mock APIs.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test harness, adjusting the configuration before the router is built.
    pub async fn with_config(adjust: impl FnOnce(&mut ServiceConfig)) -> Self {
        let wompi = MockServer::start().await;
        let payouts = MockServer::start().await;

        let mut config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            wompi_url: wompi.uri(),
            public_key: PUBLIC_KEY.into(),
            private_key: PRIVATE_KEY.into(),
            integrity_secret: INTEGRITY_SECRET.into(),
            payouts_url: payouts.uri(),
            payouts_api_key: Some(PAYOUTS_API_KEY.into()),
            payouts_user_id: Some(PAYOUTS_USER_ID.into()),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
        };
        adjust(&mut config);

        let state = AppState::new(config).expect("Failed to build app state");
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            wompi,
            payouts,
        }
    }

    /// Mount a merchant with both acceptance tokens.
    pub async fn mount_merchant(&self) {
        self.mount_merchant_body(json!({
            "data": {
                "id": 12,
                "name": "Tienda de prueba",
                "legal_name": "Tienda de prueba SAS",
                "public_key": PUBLIC_KEY,
                "presigned_acceptance": {
                    "acceptance_token": "tok_terms",
                    "permalink": "https://example.com/terms.pdf",
                    "type": "END_USER_POLICY"
                },
                "presigned_personal_data_auth": {
                    "acceptance_token": "tok_personal",
                    "permalink": "https://example.com/personal.pdf",
                    "type": "PERSONAL_DATA_AUTH"
                }
            }
        }))
        .await;
    }

    /// Mount an arbitrary merchant body.
    pub async fn mount_merchant_body(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/merchants/{PUBLIC_KEY}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.wompi)
            .await;
    }

    /// Mount a stored payment source.
    pub async fn mount_payment_source(&self, id: u64, kind: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/payment_sources/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": id,
                    "type": kind,
                    "status": "AVAILABLE",
                    "customer_email": "pepito_perez@example.com"
                }
            })))
            .mount(&self.wompi)
            .await;
    }

    /// Mount a successful `POST /transactions`.
    pub async fn mount_create_transaction(&self) {
        Mock::given(method("POST"))
            .and(path("/transactions"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {
                    "id": "12-1700000000-10000",
                    "status": "PENDING",
                    "currency": "COP",
                    "amount_in_cents": 2_500_000
                }
            })))
            .mount(&self.wompi)
            .await;
    }

    /// JSON bodies of every request the payments mock received on `path`.
    pub async fn wompi_bodies(&self, method_name: &str, request_path: &str) -> Vec<Value> {
        self.wompi
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.as_str() == method_name && r.url.path() == request_path)
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}
