// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! API Integration Tests
//!
//! Exercise the item endpoints through the complete application router.

#![allow(clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use item_catalog_server::{build_router, AppConfig, DocsSettings};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_router() -> Router {
    build_router(&AppConfig::initialize(&DocsSettings::default()))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get_items() -> Request<Body> {
    Request::builder()
        .uri("/items")
        .body(Body::empty())
        .unwrap()
}

fn post_items(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn expected_catalog() -> Value {
    json!([
        {"id": 1, "name": "Laptop", "price": 1200.0},
        {"id": 2, "name": "Mouse", "price": 25.5},
    ])
}

#[tokio::test]
async fn test_list_items_returns_fixed_catalog() {
    let router = create_test_router();

    let (status, body) = send(&router, get_items()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected_catalog());
}

#[tokio::test]
async fn test_create_item_echoes_payload() {
    let router = create_test_router();
    let payload = json!({"id": 7, "name": "Monitor", "price": 199.99});

    let (status, body) = send(&router, post_items(payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_create_item_accepts_integer_price() {
    let router = create_test_router();

    let (status, body) = send(
        &router,
        post_items(json!({"id": 1, "name": "Laptop", "price": 1200}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"].as_f64(), Some(1200.0));
}

#[tokio::test]
async fn test_create_item_permits_duplicate_ids() {
    let router = create_test_router();
    let payload = json!({"id": 1, "name": "Another Laptop", "price": 999.0});

    let (status, body) = send(&router, post_items(payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_create_item_drops_unknown_fields() {
    let router = create_test_router();

    let (status, body) = send(
        &router,
        post_items(json!({"id": 3, "name": "Pad", "price": 5.0, "color": "red"}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 3, "name": "Pad", "price": 5.0}));
}

#[tokio::test]
async fn test_create_does_not_change_list() {
    let router = create_test_router();

    for id in 10..13 {
        let payload = json!({"id": id, "name": "Extra", "price": 1.0});
        let (status, _) = send(&router, post_items(payload.to_string())).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, get_items()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected_catalog());
}

#[tokio::test]
async fn test_create_item_rejects_string_id() {
    let router = create_test_router();

    let (status, body) = send(
        &router,
        post_items(r#"{"id":"x","name":"Mouse","price":25.5}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "id");
    assert!(body["details"]["technicalDetails"]
        .as_str()
        .unwrap()
        .contains("invalid type"));
}

#[tokio::test]
async fn test_create_item_rejects_non_numeric_price() {
    let router = create_test_router();

    let (status, body) = send(
        &router,
        post_items(r#"{"id":2,"name":"Mouse","price":"cheap"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], "price");
}

#[tokio::test]
async fn test_create_item_rejects_missing_field() {
    let router = create_test_router();

    let (status, body) = send(&router, post_items(r#"{"id":2,"price":25.5}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "name");
    assert!(body["details"]["technicalDetails"]
        .as_str()
        .unwrap()
        .contains("missing field"));
}

#[tokio::test]
async fn test_create_item_rejects_empty_object() {
    let router = create_test_router();

    let (status, body) = send(&router, post_items("{}")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], "id");
}

#[tokio::test]
async fn test_create_item_rejects_malformed_json() {
    let router = create_test_router();

    let (status, body) = send(&router, post_items(r#"{"id": 2, "name": "#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["details"].get("field").is_none());
}

#[tokio::test]
async fn test_create_item_requires_json_content_type() {
    let router = create_test_router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .body(Body::from(r#"{"id":1,"name":"Laptop","price":1200}"#))
        .unwrap();

    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let router = create_test_router();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/items")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_returns_structured_404() {
    let router = create_test_router();
    let request = Request::builder()
        .uri("/items/1")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("/items/1"));
}
