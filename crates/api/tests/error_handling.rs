//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tracker_api::error::AppError;
use tracker_core::error::CoreError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Category",
        id: 999,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Category not found with id 999");
}

#[tokio::test]
async fn invalid_input_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::InvalidInput("name must not be empty".into())))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["error"], "name must not be empty");
}

#[tokio::test]
async fn invalid_state_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::InvalidState("Asset is already assigned".into())))
            .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "INVALID_STATE");
    assert_eq!(json["error"], "Asset is already assigned");
}

#[tokio::test]
async fn conflict_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict("duplicate name".into()))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Internal(
        "connection refused at 10.0.0.5".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad body");
}
