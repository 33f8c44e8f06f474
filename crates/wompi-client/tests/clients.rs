//! Client instance tests: default headers, return shapes and error mapping.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wompi_client::{
    ClientError, Method, PaymentSourceId, PayoutsClient, RequestOptions, WompiClient,
};

#[tokio::test]
async fn default_headers_are_sent_and_body_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/limits"))
        .and(header("x-api-key", "payouts-key"))
        .and(header("user-principal-id", "principal-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "daily": 10_000_000 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PayoutsClient::new(server.uri(), Some("payouts-key"), Some("principal-1")).unwrap();
    let body = client.get_limits(RequestOptions::new()).await.unwrap();

    assert_eq!(body, json!({ "data": { "daily": 10_000_000 } }));
}

#[tokio::test]
async fn optional_headers_are_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = PayoutsClient::new(server.uri(), None, None).unwrap();
    client.list_payouts(RequestOptions::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-api-key").is_none());
    assert!(requests[0].headers.get("user-principal-id").is_none());
}

#[tokio::test]
async fn accounts_are_filtered_by_origin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(query_param("origin", "wompi"))
        .and(header("authorization", "Bearer pub_test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "id": "acc_1" }] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PayoutsClient::new(server.uri(), Some("payouts-key"), None).unwrap();
    let body = client
        .list_accounts(RequestOptions::new().bearer("pub_test_key"))
        .await
        .unwrap();

    assert_eq!(body["data"][0]["id"], "acc_1");
}

#[tokio::test]
async fn payout_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payouts/pay_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "pay_42" } })))
        .mount(&server)
        .await;

    let client = PayoutsClient::new(server.uri(), None, None).unwrap();
    let body = client
        .get_payout("pay_42", RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(body["data"]["id"], "pay_42");
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banks"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = PayoutsClient::new(server.uri(), None, None).unwrap();
    let err = client.list_banks(RequestOptions::new()).await.unwrap_err();

    match err {
        ClientError::Remote { status, body, .. } => {
            assert_eq!(status, Some(503));
            assert_eq!(body, Some(json!("upstream unavailable")));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn payments_client_returns_full_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/tx_1"))
        .and(header("authorization", "Bearer prv_test_key"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-1")
                .set_body_json(json!({ "data": { "id": "tx_1", "status": "APPROVED" } })),
        )
        .mount(&server)
        .await;

    let client = WompiClient::new(server.uri(), "prv_test_key", "pub_test_key").unwrap();
    let response = client.get_transaction("tx_1").await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.headers["x-request-id"], "req-1");
    let transaction = response.data.data.unwrap();
    assert_eq!(transaction.status.as_deref(), Some("APPROVED"));
}

#[tokio::test]
async fn generic_request_with_caller_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/merchants/pub_other"))
        .and(header("authorization", "Bearer custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "name": "Other" } })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WompiClient::new(server.uri(), "prv_test_key", "pub_test_key").unwrap();
    let response: wompi_client::ApiResponse<serde_json::Value> = client
        .request(
            Method::GET,
            "/merchants/pub_other",
            RequestOptions::new().bearer("custom"),
        )
        .await
        .unwrap();

    assert_eq!(response.data["data"]["name"], "Other");
}

#[tokio::test]
async fn transport_failure_is_remote_error_without_status() {
    let uri = {
        let server = MockServer::builder().start().await;
        server.uri()
    };

    let client = PayoutsClient::new(uri, None, None).unwrap();
    let err = client.get_limits(RequestOptions::new()).await.unwrap_err();

    assert!(matches!(err, ClientError::Remote { status: None, body: None, .. }));
}

#[tokio::test]
async fn financial_institutions_use_public_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pse/financial_institutions"))
        .and(header("authorization", "Bearer pub_test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "financial_institution_code": "1022", "financial_institution_name": "BANCO UNION COLOMBIANO" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WompiClient::new(server.uri(), "prv_test_key", "pub_test_key").unwrap();
    let response = client.list_financial_institutions().await.unwrap();

    let institutions = response.into_data().into_inner().unwrap();
    assert_eq!(institutions[0]["financial_institution_code"], "1022");
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    let server = MockServer::start().await;
    let remote = json!({ "data": { "id": 5, "status": "AVAILABLE" }, "meta": { "trace_id": "abc" } });
    Mock::given(method("GET"))
        .and(path("/payment_sources/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote.clone()))
        .mount(&server)
        .await;

    let client = WompiClient::new(server.uri(), "prv_test_key", "pub_test_key").unwrap();
    let id = PaymentSourceId::new(5).unwrap();

    let err = client.get_payment_source(id).await.unwrap_err();
    match err {
        ClientError::Decode { status, body, .. } => {
            assert_eq!(status, 200);
            assert_eq!(body, Some(remote.clone()));
        }
        other => panic!("expected decode error, got {other:?}"),
    }

    let raw = client.get_payment_source_as::<Value>(id).await.unwrap();
    assert_eq!(raw.data, remote);
}

#[tokio::test]
async fn typed_envelope_keeps_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "t1", "status": "APPROVED" },
            "meta": { "trace_id": "abc" }
        })))
        .mount(&server)
        .await;

    let client = WompiClient::new(server.uri(), "prv_test_key", "pub_test_key").unwrap();
    let envelope = client.get_transaction("t1").await.unwrap().into_data();

    assert_eq!(envelope.extra["meta"]["trace_id"], "abc");
    assert_eq!(envelope.data.unwrap().id, "t1");
}

#[tokio::test]
async fn non_json_success_body_is_decode_error_with_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/limits"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = PayoutsClient::new(server.uri(), None, None).unwrap();
    let err = client.get_limits(RequestOptions::new()).await.unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert!(matches!(
        err,
        ClientError::Decode { body: Some(Value::String(ref text)), .. } if text == "<html>maintenance</html>"
    ));
}
