//! Health endpoint integration tests.

mod common;

use axum::http::{HeaderName, HeaderValue};
use common::TestHarness;

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn health_check_returns_json() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "wompi-service");
}

#[tokio::test]
async fn health_reports_payouts_credentials() {
    let harness = TestHarness::new().await;
    let body: serde_json::Value = harness.server.get("/health").await.json();
    assert_eq!(body["payouts_authenticated"], true);

    let harness = TestHarness::with_config(|config| config.payouts_api_key = None).await;
    let body: serde_json::Value = harness.server.get("/health").await.json();
    assert_eq!(body["payouts_authenticated"], false);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://shop.example"),
        )
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn cors_echoes_listed_origins_only() {
    let harness = TestHarness::with_config(|config| {
        config.cors_origins = vec!["https://shop.example".into(), "not a\norigin".into()];
    })
    .await;

    let allowed = harness
        .server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://shop.example"),
        )
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin"),
        "https://shop.example"
    );

    let other = harness
        .server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://elsewhere.example"),
        )
        .await;
    assert!(other
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
