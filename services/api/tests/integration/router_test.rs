//! Routing and extraction behavior through the assembled router. These run
//! against a disconnected database handle, so they cover what the router
//! decides before any repository work: probes, auth headers, role gates,
//! and parameter validation.

use axum::http::{HeaderMap, StatusCode};
use axum_test::{TestRequest, TestServer};
use sea_orm::DatabaseConnection;
use serde_json::json;

use shipway_api::infra::gateway::HttpPaymentGateway;
use shipway_api::router::build_router;
use shipway_api::state::AppState;
use shipway_testing::identity::{MockIdentity, api_key_headers};

use crate::helpers::TEST_API_KEY;

fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        gateway: HttpPaymentGateway::new("https://gateway.example", "sk_test"),
        api_key: TEST_API_KEY.to_owned(),
        public_base_url: "https://api.shipway.example".to_owned(),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn add_headers(mut request: TestRequest, headers: &HeaderMap) -> TestRequest {
    for (name, value) in headers {
        request = request.add_header(name.clone(), value.clone());
    }
    request
}

#[tokio::test]
async fn should_answer_health_probes() {
    let server = test_server();
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let response = server.get("/readyz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_reject_requests_without_identity_headers() {
    let server = test_server();
    let response = server.get("/packages").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let response = server.get("/accounts/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_machine_endpoints_without_api_key() {
    let server = test_server();
    let response = server
        .post("/accounts/register")
        .json(&json!({ "email": "sam@shipway.example" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_answer_json_unauthorized_for_wrong_api_key() {
    let server = test_server();
    let response = add_headers(
        server.post("/accounts/register"),
        &api_key_headers("not-the-key"),
    )
    .json(&json!({ "email": "sam@shipway.example" }))
    .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_require_search_term_for_driver_search() {
    let server = test_server();
    let identity = MockIdentity::basic();
    let response = add_headers(server.get("/drivers/search"), &identity.headers()).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_require_reference_on_payment_callback() {
    let server = test_server();
    let response = server.get("/callback").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_forbid_package_admin_routes_to_basic_users() {
    let server = test_server();
    let identity = MockIdentity::basic();
    let response = add_headers(
        server.get("/packages/rud/any/pkg-code/PKG-BBBB222233"),
        &identity.headers(),
    )
    .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_list_cargo_type_choices() {
    let server = test_server();
    let identity = MockIdentity::basic();
    let response = add_headers(server.get("/packages/cargo-types"), &identity.headers()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let choices = body["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 4);
    assert_eq!(choices[0]["value"], "solid");
    assert_eq!(choices[0]["label"], "Solid");
    assert_eq!(choices[3]["value"], "perishable");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let server = test_server();
    let response = server.get("/no-such-route").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
