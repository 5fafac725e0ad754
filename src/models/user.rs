// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User entity and its wire representations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    /// Assigned once at creation, never changed afterwards
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub games_played: u32,
    pub current_game_id: Option<Uuid>,
}

/// A user that has not been inserted yet (no identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub games_played: u32,
    pub current_game_id: Option<Uuid>,
}

/// Validated login/first name/last name triple.
///
/// Only produced by the validator, so holding one means every field rule
/// already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

/// Outbound read view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub login: String,
    /// `lastName firstName`
    pub full_name: String,
    pub current_game_id: Option<Uuid>,
    pub games_played: u32,
}

/// POST /users body.
///
/// Every field is optional on the wire so that all missing fields are
/// reported together as validation errors instead of a single parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub login: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// PUT /users/{id} body. Same shape as a create; the id comes from the path.
pub type ReplaceUserRequest = CreateUserRequest;

/// Mutable subset of the read view that PATCH documents operate on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatchTarget {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}
