//! HTTP-level tests for the category endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_asset, create_category, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn create_category_returns_201() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "name": "Electronics", "description": "Computers and phones" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Electronics");
    assert_eq!(json["data"]["description"], "Computers and phones");
    assert!(json["data"]["id"].is_number());
}

#[tokio::test]
async fn duplicate_category_name_returns_409() {
    let app = common::build_test_app();
    create_category(&app, "Electronics").await;

    let response = post_json(&app, "/api/v1/categories", json!({ "name": "Electronics" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn blank_category_name_returns_400() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/categories", json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_get_update_category() {
    let app = common::build_test_app();
    let id = create_category(&app, "Electronics").await;
    create_category(&app, "Furniture").await;

    let json = body_json(get(&app, "/api/v1/categories").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = put_json(
        &app,
        &format!("/api/v1/categories/{id}"),
        json!({ "name": "Computers", "description": "Laptops only" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, &format!("/api/v1/categories/{id}")).await).await;
    assert_eq!(json["data"]["name"], "Computers");
    assert_eq!(json["data"]["description"], "Laptops only");
}

#[tokio::test]
async fn update_missing_category_returns_404() {
    let app = common::build_test_app();
    let response = put_json(&app, "/api/v1/categories/9", json!({ "name": "X" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_category_returns_204_then_404() {
    let app = common::build_test_app();
    let id = create_category(&app, "Electronics").await;

    let response = delete(&app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_referenced_category_returns_409() {
    let app = common::build_test_app();
    let id = create_category(&app, "Electronics").await;
    create_asset(&app, "Laptop", id).await;

    let response = delete(&app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
