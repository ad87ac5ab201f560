//! Asset endpoint integration tests.

use axum::http::StatusCode;
use serde_json::Value;

use super::common::{
    asset_form, create_empty_router, create_test_router, get_request, post_form_request,
    send_request, send_request_redirect,
};

#[tokio::test]
async fn test_lookup_returns_camel_case_record() {
    let (app, _state) = create_test_router();

    let (status, body): (StatusCode, Value) =
        send_request(app, get_request("/assets/10247")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 10247);
    assert_eq!(body["name"], "Dell Laptop");
    assert_eq!(body["serialNumber"], "DL-2023-001");
    assert_eq!(body["purchaseDate"], "2023-01-15");
    assert_eq!(body["value"], 950.0);
}

#[tokio::test]
async fn test_lookup_missing_asset_is_404() {
    let (app, _state) = create_test_router();

    let (status, body): (StatusCode, Value) = send_request(app, get_request("/assets/1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_lookup_malformed_id_is_400() {
    let (app, _state) = create_test_router();

    let (status, body): (StatusCode, Value) =
        send_request(app, get_request("/assets/laptop")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_redirects_and_stores_asset() {
    let (app, state) = create_test_router();

    let (status, location) = send_request_redirect(
        app.clone(),
        post_form_request("/assets", &asset_form("Monitor", "199.99")),
    )
    .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));

    let assets = state.assets.all().await.unwrap();
    assert_eq!(assets.len(), 4);
    let created = assets.last().unwrap();
    assert_eq!(created.name, "Monitor");
    assert_eq!(created.value, 199.99);
    assert!(created.id > 30891);

    let (status, body): (StatusCode, Value) =
        send_request(app, get_request(&format!("/assets/{}", created.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Lab");
}

#[tokio::test]
async fn test_create_allocates_unique_ids() {
    let (app, state) = create_empty_router();

    for i in 0..5 {
        let (status, _) = send_request_redirect(
            app.clone(),
            post_form_request("/assets", &asset_form(&format!("Item {}", i), "10")),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
    }

    let mut ids: Vec<u64> = state
        .assets
        .all()
        .await
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_create_with_non_numeric_value_is_rejected() {
    let (app, state) = create_test_router();

    let (status, body): (StatusCode, Value) = send_request(
        app,
        post_form_request("/assets", &asset_form("Broken", "abc")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["value"].is_array());
    assert_eq!(state.assets.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_create_with_negative_value_is_rejected() {
    let (app, state) = create_test_router();

    let (status, body): (StatusCode, Value) = send_request(
        app,
        post_form_request("/assets", &asset_form("Refund", "-5")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["value"].is_array());
    assert_eq!(state.assets.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let (app, state) = create_test_router();

    let (status, location) = send_request_redirect(
        app,
        post_form_request("/assets/20583/update", &asset_form("Standing Desk", "640")),
    )
    .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));

    let asset = state.assets.find_by_id(20583).await.unwrap().unwrap();
    assert_eq!(asset.id, 20583);
    assert_eq!(asset.name, "Standing Desk");
    assert_eq!(asset.serial_number, "SN-TEST-1");
    assert_eq!(asset.value, 640.0);
    assert_eq!(asset.location, "Lab");
}

#[tokio::test]
async fn test_update_missing_asset_is_404_and_store_unchanged() {
    let (app, state) = create_test_router();
    let before = state.assets.all().await.unwrap();

    let (status, body): (StatusCode, Value) = send_request(
        app,
        post_form_request("/assets/5/update", &asset_form("Ghost", "1")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(state.assets.all().await.unwrap(), before);
}

#[tokio::test]
async fn test_update_with_invalid_value_leaves_asset_alone() {
    let (app, state) = create_test_router();

    let (status, _body): (StatusCode, Value) = send_request(
        app,
        post_form_request("/assets/10247/update", &asset_form("Dell Laptop", "NaN")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let asset = state.assets.find_by_id(10247).await.unwrap().unwrap();
    assert_eq!(asset.value, 950.0);
}

#[tokio::test]
async fn test_delete_then_lookup_is_404() {
    let (app, state) = create_test_router();

    let (status, location) =
        send_request_redirect(app.clone(), post_form_request("/assets/30891/delete", "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
    assert_eq!(state.assets.count().await.unwrap(), 2);

    let (status, _body): (StatusCode, Value) =
        send_request(app, get_request("/assets/30891")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_asset_is_404() {
    let (app, state) = create_test_router();

    let (status, body): (StatusCode, Value) =
        send_request(app, post_form_request("/assets/77/delete", "")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(state.assets.count().await.unwrap(), 3);
}
