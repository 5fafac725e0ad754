// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use users_api::config::Config;
use users_api::db::InMemoryUserStore;
use users_api::routes::create_router;
use users_api::AppState;
use uuid::Uuid;

/// Create a test app over a fresh in-memory store.
/// Returns the router and the store so tests can inspect or seed it.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let state = Arc::new(AppState::new(Config::default(), store.clone()));
    (create_router(state), store)
}

/// Build a request with a JSON body.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request without a body.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and collect status, headers and body.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

/// POST a valid user and return its id.
#[allow(dead_code)]
pub async fn create_user(app: &Router, login: &str, first_name: &str, last_name: &str) -> Uuid {
    let (status, _, body) = send(
        app,
        json_request(
            "POST",
            "/users",
            serde_json::json!({
                "login": login,
                "firstName": first_name,
                "lastName": last_name,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&body).unwrap()
}
