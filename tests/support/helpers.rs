// tests/support/helpers.rs
use super::mocks::SteppingClock;
use address_book::{
    application::{ports::time::Clock, services::ApplicationServices},
    domain::address::AddressRepository,
    infrastructure::repositories::InMemoryAddressRepository,
    presentation::http::{routes::build_router, state::HttpState},
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tower::util::ServiceExt as _;

pub const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_test_state(repo: Arc<dyn AddressRepository>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let services = ApplicationServices::new(repo, clock).expect("address features register");

    HttpState {
        services: Arc::new(services),
        request_timeout: TEST_REQUEST_TIMEOUT,
    }
}

/// インメモリストアを使うルーター
pub fn make_test_router() -> Router {
    make_test_router_with_repo(Arc::new(InMemoryAddressRepository::new()))
}

pub fn make_test_router_with_repo(repo: Arc<dyn AddressRepository>) -> Router {
    build_router(build_test_state(repo), &["*".to_owned()]).expect("router builds")
}

pub fn address_json(street: &str, city: &str, state: &str, zip: &str, country: &str) -> Value {
    json!({
        "street": street,
        "city": city,
        "state": state,
        "zipCode": zip,
        "country": country,
    })
}

pub fn valid_address() -> Value {
    address_json("1 Main St", "Springfield", "IL", "62701", "USA")
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// POST /addresses を実行し、作成されたリソースの JSON を返す
pub async fn create_address(app: &Router, payload: Value) -> Value {
    let resp = send(app, Method::POST, "/addresses", Some(payload)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error code.
/// Returns the message field.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_owned()
}

/// Assert a 500 problem+json body and return it.
pub async fn assert_problem_response(resp: Response) -> Value {
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert_eq!(ct, "application/problem+json");

    let json = json_body(resp).await;
    assert_eq!(json["status"], 500);
    assert!(json["title"].is_string());
    assert!(json["detail"].is_string());
    json
}
