//! Integration tests for website configuration handlers

mod common;

use crate::common::{TestRequest, create_test_app_state, send, test_router, token_for};

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn given_no_config_when_reading_then_200_null() {
    let app = test_router(create_test_app_state().await);

    let response = send(&app, TestRequest::get("/cms/website-config?businessUnitId=bu1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::Value::Null);
}

#[tokio::test]
async fn given_no_business_unit_when_reading_then_400() {
    let app = test_router(create_test_app_state().await);

    let response = send(&app, TestRequest::get("/cms/website-config")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_member_when_upserting_twice_then_one_config_with_latest_values() {
    // Given
    let app = test_router(create_test_app_state().await);
    let token = token_for(&[("bu1", "Editor")]);

    // When
    let first = send(
        &app,
        TestRequest::post("/cms/website-config")
            .tenant("bu1")
            .token(token.clone())
            .json(json!({
                "siteName": "Seaside Inn",
                "primaryColor": "#004466",
                "socialLinks": { "instagram": "https://instagram.com/seaside" }
            })),
    )
    .await;
    let second = send(
        &app,
        TestRequest::post("/cms/website-config")
            .tenant("bu1")
            .token(token)
            .json(json!({ "siteName": "Seaside Inn & Spa" })),
    )
    .await;

    // Then
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.json()["id"], second.json()["id"]);

    let stored = send(&app, TestRequest::get("/cms/website-config?businessUnitId=bu1"))
        .await
        .json();
    assert_eq!(stored["siteName"], "Seaside Inn & Spa");
    assert_eq!(stored["primaryColor"], serde_json::Value::Null);
    assert_eq!(stored["businessUnitId"], "bu1");
}

#[tokio::test]
async fn given_non_member_when_upserting_then_403() {
    let app = test_router(create_test_app_state().await);

    let response = send(
        &app,
        TestRequest::post("/cms/website-config")
            .tenant("bu1")
            .token(token_for(&[("bu2", "Admin")]))
            .json(json!({ "siteName": "Hijack" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn given_missing_site_name_when_upserting_then_400() {
    let app = test_router(create_test_app_state().await);

    let response = send(
        &app,
        TestRequest::post("/cms/website-config")
            .tenant("bu1")
            .token(token_for(&[("bu1", "Editor")]))
            .json(json!({ "tagline": "By the sea" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing required fields");
}
