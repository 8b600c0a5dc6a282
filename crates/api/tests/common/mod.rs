#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tracker_api::config::ServerConfig;
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;
use tracker_core::inventory::memory::InMemoryStore;
use tracker_core::inventory::Inventory;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router backed by a fresh in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// under test is the production one. Clone the returned router to send
/// several requests against the same store.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        pool: None,
        config: Arc::new(config.clone()),
        inventory: Inventory::new(Arc::new(InMemoryStore::new())),
    };
    build_app_router(state, &config)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category and return its id.
pub async fn create_category(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Register an employee under `id`.
pub async fn create_employee(app: &Router, id: i64, full_name: &str) {
    post_json(
        app,
        "/api/v1/employees",
        serde_json::json!({ "id": id, "full_name": full_name }),
    )
    .await;
}

/// Create an asset in `category_id` and return its id.
pub async fn create_asset(app: &Router, name: &str, category_id: i64) -> i64 {
    let response = post_json(
        app,
        "/api/v1/assets",
        serde_json::json!({ "name": name, "category": { "id": category_id } }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
