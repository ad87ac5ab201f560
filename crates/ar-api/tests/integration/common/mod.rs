//! Common test utilities for integration tests.

use axum::{
    body::Body,
    http::{header, Method, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use ar_api::{ApiServer, AppState};

/// Creates a state pre-loaded with the three demo assets.
pub fn create_test_state() -> AppState {
    AppState::with_demo_data("Meraki Communications")
}

/// Creates the full application router over the demo inventory.
pub fn create_test_router() -> (Router, AppState) {
    let state = create_test_state();
    let router = ApiServer::with_state(state.clone()).router();
    (router, state)
}

/// Creates the full application router over an empty register.
pub fn create_empty_router() -> (Router, AppState) {
    let state = AppState::in_memory("Empty Co");
    let router = ApiServer::with_state(state.clone()).router();
    (router, state)
}

/// Helper to make GET requests.
pub fn get_request(uri: &str) -> axum::extract::Request<Body> {
    axum::extract::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to make POST requests with a form-encoded body.
pub fn post_form_request(uri: &str, body: &str) -> axum::extract::Request<Body> {
    axum::extract::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Form body for a complete asset.
pub fn asset_form(name: &str, value: &str) -> String {
    serde_urlencoded::to_string(vec![
        ("name", name),
        ("category", "Electronics"),
        ("serialNumber", "SN-TEST-1"),
        ("purchaseDate", "2024-06-01"),
        ("value", value),
        ("status", "Active"),
        ("location", "Lab"),
    ])
    .unwrap()
}

/// Sends request and parses JSON response.
pub async fn send_request<T: DeserializeOwned>(
    app: Router,
    request: axum::extract::Request<Body>,
) -> (StatusCode, T) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: T = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Failed to parse response: {} - Body: {:?}",
            e,
            String::from_utf8_lossy(&body)
        )
    });
    (status, parsed)
}

/// Sends request and returns raw response body.
pub async fn send_request_raw(
    app: Router,
    request: axum::extract::Request<Body>,
) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

/// Sends request and returns the status and `Location` header.
pub async fn send_request_redirect(
    app: Router,
    request: axum::extract::Request<Body>,
) -> (StatusCode, Option<String>) {
    let response = app.oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    (response.status(), location)
}
