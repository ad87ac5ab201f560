//! Rendered page integration tests.

use axum::http::StatusCode;

use super::common::{
    asset_form, create_empty_router, create_test_router, get_request, post_form_request,
    send_request_raw, send_request_redirect,
};

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in page", needle))
}

#[tokio::test]
async fn test_index_shows_inventory_and_totals() {
    let (app, _state) = create_test_router();

    let (status, body) = send_request_raw(app, get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Meraki Communications"));
    assert!(body.contains("DL-2023-001"));
    assert!(body.contains("1590.00"));
}

#[tokio::test]
async fn test_value_sort_ascending_and_descending() {
    let (app, _state) = create_test_router();

    let (_, asc) = send_request_raw(app.clone(), get_request("/?sort=value&order=asc")).await;
    assert!(position(&asc, "Office Chair") < position(&asc, "HP Printer"));
    assert!(position(&asc, "HP Printer") < position(&asc, "Dell Laptop"));

    let (_, desc) = send_request_raw(app, get_request("/?sort=value&order=desc")).await;
    assert!(position(&desc, "Dell Laptop") < position(&desc, "HP Printer"));
    assert!(position(&desc, "HP Printer") < position(&desc, "Office Chair"));
    assert!(desc.contains("1590.00"));
}

#[tokio::test]
async fn test_purchase_date_sort() {
    let (app, _state) = create_test_router();

    let (_, body) = send_request_raw(app, get_request("/?sort=purchaseDate")).await;

    assert!(position(&body, "HP Printer") < position(&body, "Dell Laptop"));
    assert!(position(&body, "Dell Laptop") < position(&body, "Office Chair"));
}

#[tokio::test]
async fn test_search_matches_location_case_insensitively() {
    let (app, _state) = create_test_router();

    let (status, body) = send_request_raw(app, get_request("/?search=oFFice+b")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Office Chair"));
    assert!(!body.contains("Dell Laptop"));
    assert!(!body.contains("HP Printer"));
    assert!(body.contains("1590.00"));
}

#[tokio::test]
async fn test_created_asset_appears_on_index() {
    let (app, _state) = create_empty_router();

    let (status, _) = send_request_redirect(
        app.clone(),
        post_form_request("/assets", &asset_form("Projector", "1200.5")),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = send_request_raw(app, get_request("/")).await;
    assert!(body.contains("Projector"));
    assert!(body.contains("1200.50"));
}

#[tokio::test]
async fn test_label_page() {
    let (app, _state) = create_test_router();

    let (status, body) = send_request_raw(app, get_request("/assets/10247/label")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dell Laptop"));
    assert!(body.contains("10247"));
    assert!(body.contains("DL-2023-001"));
    assert!(body.contains("Meraki Communications"));
}

#[tokio::test]
async fn test_label_uses_renamed_company() {
    let (app, state) = create_test_router();
    state.settings.set_company_name("Initech".to_string()).await;

    let (_, body) = send_request_raw(app, get_request("/assets/10247/label")).await;

    assert!(body.contains("Initech"));
}

#[tokio::test]
async fn test_label_for_missing_asset_redirects_home() {
    let (app, _state) = create_test_router();

    let (status, location) = send_request_redirect(app, get_request("/assets/4/label")).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
}
