use crate::ApiError;
use crate::api::error::OperationContext;

use cms_auth::DenyReason;
use cms_core::{CoreError, RequiredFields};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn status_and_body(error: ApiError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn given_unauthenticated_denial_when_rendered_then_401_plain_text() {
    let error = ApiError::from_denial(DenyReason::Unauthenticated, "unused");

    let (status, body) = status_and_body(error).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(body.as_str(), eq("Unauthorized"));
}

#[tokio::test]
async fn given_forbidden_denial_when_rendered_then_403() {
    let error = ApiError::from_denial(DenyReason::Forbidden, "unused");

    let (status, body) = status_and_body(error).await;

    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(body.as_str(), eq("Forbidden"));
}

#[tokio::test]
async fn given_missing_tenant_denial_when_rendered_then_400_with_source_message() {
    let error =
        ApiError::from_denial(DenyReason::MissingTenant, "Missing x-business-unit-id header");

    let (status, body) = status_and_body(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(body.as_str(), eq("Missing x-business-unit-id header"));
}

#[tokio::test]
async fn given_missing_fields_when_rendered_then_400_without_field_names() {
    let core_error = RequiredFields::new()
        .check("question", None)
        .check("answer", Some(" "))
        .finish()
        .unwrap_err();
    let error = ApiError::from(core_error);

    let (status, body) = status_and_body(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(body.as_str(), eq("Missing required fields"));
}

#[tokio::test]
async fn given_invalid_field_when_converted_then_400_names_field() {
    let core_error = CoreError::InvalidField {
        field: "rating".to_string(),
        message: "must be between 1 and 5, got 9".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = status_and_body(ApiError::from(core_error)).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(body.as_str(), eq("Invalid rating"));
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_hides_detail() {
    let error = ApiError::not_found("FAQ abc in business unit bu1");

    let (status, body) = status_and_body(error).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(body.as_str(), eq("Not found"));
}

#[tokio::test]
async fn given_db_failure_when_tagged_then_500_and_operation_kept() {
    // Given
    let db_result: cms_db::Result<()> = Err(cms_db::DbError::CorruptRow {
        table: "faqs",
        message: "bad timestamp".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let error = db_result.operation("list_faqs").unwrap_err();

    // Then
    assert!(matches!(
        &error,
        ApiError::Internal { operation: "list_faqs", message, .. } if message.contains("bad timestamp")
    ));
    let (status, body) = status_and_body(error).await;
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body.as_str(), eq("Internal error"));
}
