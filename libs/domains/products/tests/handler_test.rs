//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run the products router alone on the in-memory repository,
//! so no database is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({"productName": "Widget"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"id": 1, "productName": "Widget"}));
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let app = app();

    for payload in [
        json!({"productName": ""}),
        json!({}),
        json!({"productName": 42}),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/", payload.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload {payload} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_create_product_handler_requires_json_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"productName":"Widget"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_product_handler_not_found_message() {
    let response = app().oneshot(empty_request("GET", "/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product with ID 99 not found");
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_product_handler_invalid_id() {
    let response = app().oneshot(empty_request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Invalid product ID: abc");
}

#[tokio::test]
async fn test_full_crud_flow() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", json!({"productName": "Widget"})))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;
    assert_eq!(created.id, 1);

    let response = app.clone().oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/1", json!({"productName": "Gadget"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.product_name, "Gadget");

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(all, vec![updated.clone()]);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Product = json_body(response.into_body()).await;
    assert_eq!(deleted, updated);

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_with_empty_body_returns_current_record() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/", json!({"productName": "Widget"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PATCH", "/1", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.product_name, "Widget");
}

#[tokio::test]
async fn test_patch_rejects_empty_name() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/", json!({"productName": "Widget"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PATCH", "/1", json!({"productName": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_patch_and_delete_missing_product() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/7", json!({"productName": "Gadget"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", "/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product with ID 7 not found");
}

#[tokio::test]
async fn test_patch_without_body_reports_invalid_id() {
    let response = app().oneshot(empty_request("PATCH", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Invalid product ID: abc");
}

#[tokio::test]
async fn test_patch_without_body_reports_missing_product() {
    let response = app().oneshot(empty_request("PATCH", "/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product with ID 99 not found");
}

#[tokio::test]
async fn test_patch_without_body_returns_current_record() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/", json!({"productName": "Widget"})))
        .await
        .unwrap();

    let response = app.oneshot(empty_request("PATCH", "/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"id": 1, "productName": "Widget"}));
}

#[tokio::test]
async fn test_get_product_rejects_numeric_prefix_id() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/", json!({"productName": "Widget"})))
        .await
        .unwrap();

    let response = app.oneshot(empty_request("GET", "/1abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Invalid product ID: 1abc");
}
