//! `/create_customer` integration tests.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{created_body, TestHarness};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn missing_customer_is_created_once() {
    let harness = TestHarness::new().await;
    harness.customer_missing().await;

    let expected_body = serde_json::to_value(&harness.customer).unwrap();
    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body(&harness.customer)))
        .expect(1)
        .mount(&harness.asaas)
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Cliente criado com sucesso.");
}

#[tokio::test]
async fn creation_payload_uses_asaas_field_names() {
    let harness = TestHarness::new().await;
    harness.customer_missing().await;
    harness
        .expect_creation(
            ResponseTemplate::new(200).set_body_json(created_body(&harness.customer)),
            1,
        )
        .await;

    harness.server.get("/create_customer").await.assert_status_ok();

    let requests = harness.asaas.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("creation request");
    let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();

    assert_eq!(body["cpfCnpj"], harness.customer.cpf_cnpj);
    assert_eq!(body["mobilePhone"], harness.customer.mobile_phone);
    assert_eq!(body["addressNumber"], harness.customer.address_number);
    assert_eq!(body["postalCode"], harness.customer.postal_code);
    assert_eq!(body["phone"], "");
    assert_eq!(body.as_object().unwrap().len(), 10);
}

#[tokio::test]
async fn existing_customer_returns_conflict_without_creating() {
    let harness = TestHarness::new().await;
    harness.customer_exists().await;
    harness
        .expect_creation(ResponseTemplate::new(200), 0)
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status(StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["message"], "Cliente já existe");
}

#[tokio::test]
async fn repeated_calls_do_not_duplicate_existing_customer() {
    let harness = TestHarness::new().await;
    harness.customer_exists().await;
    harness
        .expect_creation(ResponseTemplate::new(200), 0)
        .await;

    for _ in 0..3 {
        harness
            .server
            .get("/create_customer")
            .await
            .assert_status(StatusCode::CONFLICT);
    }
}

#[tokio::test]
async fn missing_token_returns_internal_error_without_calling_asaas() {
    let harness = TestHarness::without_token().await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(harness.asaas_request_count().await, 0);
}

#[tokio::test]
async fn malformed_lookup_body_returns_internal_error_without_creating() {
    let harness = TestHarness::new().await;
    harness
        .mock_lookup(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .await;
    harness
        .expect_creation(ResponseTemplate::new(200), 0)
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "verification_failed");
}

#[tokio::test]
async fn rejected_payload_returns_internal_error() {
    let harness = TestHarness::new().await;
    harness.customer_missing().await;
    harness
        .expect_creation(
            ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{ "code": "invalid_cpfCnpj", "description": "O CPF/CNPJ informado é inválido." }]
            })),
            1,
        )
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "creation_failed");
    assert_eq!(body["error"]["message"], "Erro ao criar cliente");
}

#[tokio::test]
async fn provider_conflict_on_creation_returns_internal_error() {
    let harness = TestHarness::new().await;
    harness.customer_missing().await;
    harness
        .expect_creation(
            ResponseTemplate::new(409).set_body_json(json!({
                "errors": [{ "code": "duplicated", "description": "Cliente duplicado" }]
            })),
            1,
        )
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "creation_failed");
}

#[tokio::test]
async fn lookup_error_body_without_data_proceeds_to_creation() {
    let harness = TestHarness::new().await;
    harness
        .mock_lookup(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "code": "not_found", "description": "Recurso não encontrado" }]
        })))
        .await;
    harness
        .expect_creation(
            ResponseTemplate::new(200).set_body_json(created_body(&harness.customer)),
            1,
        )
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Cliente criado com sucesso.");
}

#[tokio::test]
async fn slow_provider_is_cut_off() {
    let harness = TestHarness::with_asaas_timeout(1).await;
    harness
        .mock_lookup(
            ResponseTemplate::new(200)
                .set_body_json(common::lookup_body(0))
                .set_delay(Duration::from_secs(3)),
        )
        .await;
    harness
        .expect_creation(ResponseTemplate::new(200), 0)
        .await;

    let response = harness.server.get("/create_customer").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
