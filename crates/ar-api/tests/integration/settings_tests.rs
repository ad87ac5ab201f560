//! Company settings integration tests.

use axum::{
    body::Body,
    http::{header, Method, StatusCode},
};
use serde_json::{json, Value};

use super::common::{create_test_router, get_request, post_form_request, send_request};

#[tokio::test]
async fn test_get_company_name() {
    let (app, _state) = create_test_router();

    let (status, body): (StatusCode, Value) =
        send_request(app, get_request("/settings/company")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "companyName": "Meraki Communications"})
    );
}

#[tokio::test]
async fn test_rename_trims_and_persists() {
    let (app, state) = create_test_router();

    let (status, body): (StatusCode, Value) = send_request(
        app.clone(),
        post_form_request("/settings/company", "name=++Globex+Corporation++"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["companyName"], "Globex Corporation");
    assert_eq!(state.settings.company_name().await, "Globex Corporation");

    let (_, body): (StatusCode, Value) = send_request(app, get_request("/settings/company")).await;
    assert_eq!(body["companyName"], "Globex Corporation");
}

#[tokio::test]
async fn test_blank_rename_keeps_current_name() {
    let (app, state) = create_test_router();

    let (status, body): (StatusCode, Value) =
        send_request(app, post_form_request("/settings/company", "name=++")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["companyName"], "Meraki Communications");
    assert_eq!(state.settings.company_name().await, "Meraki Communications");
}

#[tokio::test]
async fn test_rename_without_name_field_keeps_current_name() {
    let (app, _state) = create_test_router();

    let (status, body): (StatusCode, Value) =
        send_request(app, post_form_request("/settings/company", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyName"], "Meraki Communications");
}

#[tokio::test]
async fn test_rename_accepts_json_body() {
    let (app, state) = create_test_router();

    let request = axum::extract::Request::builder()
        .method(Method::POST)
        .uri("/settings/company")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":" Acme "}"#))
        .unwrap();
    let (status, body): (StatusCode, Value) = send_request(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "companyName": "Acme"}));
    assert_eq!(state.settings.company_name().await, "Acme");
}

#[tokio::test]
async fn test_rename_with_malformed_json_is_bad_request() {
    let (app, state) = create_test_router();

    let request = axum::extract::Request::builder()
        .method(Method::POST)
        .uri("/settings/company")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let (status, body): (StatusCode, Value) = send_request(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(state.settings.company_name().await, "Meraki Communications");
}
