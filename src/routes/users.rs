// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `/users` resource routes.

use crate::config::Config;
use crate::db::UpsertOutcome;
use crate::error::{AppError, Result};
use crate::models::{CreateUserRequest, ReplaceUserRequest, UserView};
use crate::services::pagination::{PageRequest, PaginationHeader};
use crate::services::patch::PatchOperation;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub const X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// User resource routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).options(user_options),
        )
        .route(
            "/users/{id}",
            get(get_user)
                .head(head_user)
                .put(upsert_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// Ids that are not UUIDs never match a user.
fn resource_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("User {raw} not found")))
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// 201 with the new resource's location and its id as the body.
fn created(config: &Config, id: Uuid) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, config.user_url(id))],
        Json(id),
    )
        .into_response()
}

// ─── Single User ─────────────────────────────────────────────

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserView>> {
    let id = resource_id(&id)?;
    Ok(Json(state.users.get(id).await?))
}

/// Existence check: same status as GET, no body.
async fn head_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = resource_id(&id)?;
    if !state.users.exists(id).await? {
        return Err(AppError::NotFound(format!("User {id} not found")));
    }
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)]).into_response())
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload.map_err(bad_body)?;
    let id = state.users.create(request).await?;
    Ok(created(&state.config, id))
}

/// Replace the user, or create it under the path id.
async fn upsert_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ReplaceUserRequest>, JsonRejection>,
) -> Result<Response> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::BadRequest(format!("Invalid user id: {id}")))?;
    let Json(request) = payload.map_err(bad_body)?;

    match state.users.upsert(id, request).await? {
        UpsertOutcome::Inserted => Ok(created(&state.config, id)),
        UpsertOutcome::Replaced => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn patch_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> Result<StatusCode> {
    let id = resource_id(&id)?;
    let Json(operations) = payload.map_err(bad_body)?;

    state.users.patch(id, &operations).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = resource_id(&id)?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Collection ──────────────────────────────────────────────

/// Paged listing. Each parameter is read on its own; out-of-range or
/// unparseable values are corrected, not rejected.
async fn list_users(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Response> {
    let params = query.map(|Query(params)| params).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unparseable listing query, using defaults");
        HashMap::new()
    });
    let request = PageRequest::from_raw(
        params.get("pageNumber").map(String::as_str),
        params.get("pageSize").map(String::as_str),
    );

    let listing = state.users.list(request, &state.config.users_url()).await?;

    let pagination = PaginationHeader::new(&listing.page, listing.links);
    let pagination = serde_json::to_string(&pagination).map_err(anyhow::Error::from)?;
    let pagination = HeaderValue::from_str(&pagination).map_err(anyhow::Error::from)?;

    Ok(([(X_PAGINATION, pagination)], Json(listing.users)).into_response())
}

async fn user_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, ALLOWED_METHODS)])
}
