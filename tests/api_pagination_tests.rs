// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Listing tests.
//!
//! These tests verify that:
//! 1. Page metadata and links are reported in the `X-Pagination` header
//! 2. Out-of-range parameters are clamped instead of rejected
//! 3. Integer overflows are prevented

use axum::http::{HeaderMap, StatusCode};
use serde_json::{json, Value};
use users_api::models::UserView;

mod common;
use common::{create_user, empty_request, send};

fn pagination(headers: &HeaderMap) -> Value {
    let raw = headers
        .get("X-Pagination")
        .expect("X-Pagination header missing")
        .to_str()
        .unwrap();
    serde_json::from_str(raw).unwrap()
}

async fn seed(app: &axum::Router, count: usize) {
    for i in 0..count {
        create_user(app, &format!("user{i}"), "First", "Last").await;
    }
}

#[tokio::test]
async fn test_middle_page() {
    let (app, _) = common::create_test_app();
    seed(&app, 25).await;

    let (status, headers, body) =
        send(&app, empty_request("GET", "/users?pageNumber=2&pageSize=10")).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 10);
    assert_eq!(users[0].login, "user10");
    assert_eq!(users[9].login, "user19");

    assert_eq!(
        pagination(&headers),
        json!({
            "previousPageLink": "http://localhost:5000/users?pageNumber=1&pageSize=10",
            "nextPageLink": "http://localhost:5000/users?pageNumber=3&pageSize=10",
            "totalCount": 25,
            "pageSize": 10,
            "currentPage": 2,
            "totalPages": 3,
        })
    );
}

#[tokio::test]
async fn test_page_beyond_last() {
    let (app, _) = common::create_test_app();
    seed(&app, 25).await;

    let (status, headers, body) =
        send(&app, empty_request("GET", "/users?pageNumber=4&pageSize=10")).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert!(users.is_empty());

    let meta = pagination(&headers);
    assert_eq!(meta["totalCount"], 25);
    assert_eq!(meta["totalPages"], 3);
    assert_eq!(meta["nextPageLink"], Value::Null);
    assert_eq!(
        meta["previousPageLink"],
        "http://localhost:5000/users?pageNumber=3&pageSize=10"
    );
}

#[tokio::test]
async fn test_parameters_are_clamped() {
    let (app, _) = common::create_test_app();
    seed(&app, 25).await;

    let (status, headers, body) =
        send(&app, empty_request("GET", "/users?pageNumber=-5&pageSize=1000")).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 20);

    let meta = pagination(&headers);
    assert_eq!(meta["currentPage"], 1);
    assert_eq!(meta["pageSize"], 20);
    assert_eq!(meta["totalPages"], 2);
    assert_eq!(meta["previousPageLink"], Value::Null);
}

#[tokio::test]
async fn test_zero_page_size_becomes_one() {
    let (app, _) = common::create_test_app();
    seed(&app, 3).await;

    let (_, headers, body) = send(&app, empty_request("GET", "/users?pageSize=0")).await;
    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(pagination(&headers)["totalPages"], 3);
}

#[tokio::test]
async fn test_defaults_without_query() {
    let (app, _) = common::create_test_app();
    seed(&app, 12).await;

    let (_, headers, body) = send(&app, empty_request("GET", "/users")).await;
    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 10);

    let meta = pagination(&headers);
    assert_eq!(meta["currentPage"], 1);
    assert_eq!(meta["pageSize"], 10);
}

#[tokio::test]
async fn test_unparseable_query_falls_back_to_defaults() {
    let (app, _) = common::create_test_app();
    seed(&app, 2).await;

    let (status, headers, _) =
        send(&app, empty_request("GET", "/users?pageNumber=abc&pageSize=xyz")).await;
    assert_eq!(status, StatusCode::OK);

    let meta = pagination(&headers);
    assert_eq!(meta["currentPage"], 1);
    assert_eq!(meta["pageSize"], 10);
}

#[tokio::test]
async fn test_huge_page_number_does_not_overflow() {
    let (app, _) = common::create_test_app();
    seed(&app, 2).await;

    let uri = format!("/users?pageNumber={}&pageSize=20", i64::MAX);
    let (status, headers, body) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert!(users.is_empty());
    assert_eq!(pagination(&headers)["nextPageLink"], Value::Null);
}

#[tokio::test]
async fn test_empty_collection() {
    let (app, _) = common::create_test_app();

    let (status, headers, body) = send(&app, empty_request("GET", "/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));

    let meta = pagination(&headers);
    assert_eq!(meta["totalCount"], 0);
    assert_eq!(meta["totalPages"], 0);
}

#[tokio::test]
async fn test_bad_page_size_keeps_valid_page_number() {
    let (app, _) = common::create_test_app();
    seed(&app, 25).await;

    let (status, headers, body) =
        send(&app, empty_request("GET", "/users?pageNumber=2&pageSize=abc")).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users[0].login, "user10");

    let meta = pagination(&headers);
    assert_eq!(meta["currentPage"], 2);
    assert_eq!(meta["pageSize"], 10);
}

#[tokio::test]
async fn test_overflowing_page_size_is_clamped() {
    let (app, _) = common::create_test_app();
    seed(&app, 25).await;

    let (status, headers, body) = send(
        &app,
        empty_request("GET", "/users?pageNumber=1&pageSize=99999999999999999999"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<UserView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 20);
    assert_eq!(pagination(&headers)["pageSize"], 20);
}
