//! Common test utilities for asaas-onboarding integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use asaas_onboarding_core::Customer;
use asaas_onboarding_service::{create_router, AppState, ServiceConfig};

/// Access token the mocked Asaas API expects.
pub const TEST_ACCESS_TOKEN: &str = "$aact_test_token";

/// Test harness with a mocked Asaas API behind the service router.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Stand-in for the Asaas API.
    pub asaas: MockServer,
    /// The customer the service registers.
    pub customer: Customer,
}

impl TestHarness {
    /// Create a harness with an access token configured.
    pub async fn new() -> Self {
        Self::build(Some(TEST_ACCESS_TOKEN), 5).await
    }

    /// Create a harness without an access token.
    pub async fn without_token() -> Self {
        Self::build(None, 5).await
    }

    /// Create a harness whose Asaas calls time out after `seconds`.
    pub async fn with_asaas_timeout(seconds: u64) -> Self {
        Self::build(Some(TEST_ACCESS_TOKEN), seconds).await
    }

    async fn build(access_token: Option<&str>, asaas_timeout_seconds: u64) -> Self {
        let asaas = MockServer::start().await;
        let customer = Customer::onboarding_profile();

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            asaas_api_url: asaas.uri(),
            access_token: access_token.map(str::to_string),
            request_timeout_seconds: 30,
            asaas_timeout_seconds,
        };

        let state = AppState::new(config, customer.clone()).expect("Failed to build app state");
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            asaas,
            customer,
        }
    }

    /// Mount a lookup response for the harness customer.
    pub async fn mock_lookup(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(query_param("cpfCnpj", self.customer.cpf_cnpj.as_str()))
            .and(header("access_token", TEST_ACCESS_TOKEN))
            .and(header("accept", "application/json"))
            .respond_with(response)
            .mount(&self.asaas)
            .await;
    }

    /// Lookup answers with an existing customer.
    pub async fn customer_exists(&self) {
        self.mock_lookup(ResponseTemplate::new(200).set_body_json(lookup_body(1)))
            .await;
    }

    /// Lookup answers with no match.
    pub async fn customer_missing(&self) {
        self.mock_lookup(ResponseTemplate::new(200).set_body_json(lookup_body(0)))
            .await;
    }

    /// Expect exactly `times` creation calls answered with `response`.
    pub async fn expect_creation(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("POST"))
            .and(path("/customers"))
            .and(header("access_token", TEST_ACCESS_TOKEN))
            .and(header("content-type", "application/json"))
            .respond_with(response)
            .expect(times)
            .mount(&self.asaas)
            .await;
    }

    /// Number of requests Asaas received.
    pub async fn asaas_request_count(&self) -> usize {
        self.asaas
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// An Asaas search response with `count` matching customers.
pub fn lookup_body(count: usize) -> Value {
    let data: Vec<Value> = (0..count)
        .map(|i| json!({ "object": "customer", "id": format!("cus_{i:012}") }))
        .collect();

    json!({
        "object": "list",
        "hasMore": false,
        "totalCount": count,
        "limit": 10,
        "offset": 0,
        "data": data
    })
}

/// An Asaas creation response.
pub fn created_body(customer: &Customer) -> Value {
    json!({
        "object": "customer",
        "id": "cus_000005219613",
        "name": customer.name,
        "cpfCnpj": customer.cpf_cnpj
    })
}
