// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapping between the stored entity and its wire representations.
//!
//! | source            | destination   | id        | login/names | fullName | gamesPlayed | currentGameId |
//! |-------------------|---------------|-----------|-------------|----------|-------------|---------------|
//! | entity            | read view     | copy      | copy login  | derived  | copy        | copy          |
//! | validated fields  | new user      | (store)   | copy        | -        | default 0   | default none  |
//! | fields + path id  | entity        | path      | copy        | -        | default 0   | default none  |
//! | entity            | patch target  | ignored   | copy        | -        | ignored     | ignored       |
//! | patch target      | entity        | kept      | copy        | -        | kept        | kept          |

use crate::models::{NewUser, UserEntity, UserFields, UserPatchTarget, UserView};
use uuid::Uuid;

/// `lastName firstName`, last name first.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{last_name} {first_name}")
}

impl From<&UserEntity> for UserView {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            full_name: full_name(&user.first_name, &user.last_name),
            current_game_id: user.current_game_id,
            games_played: user.games_played,
        }
    }
}

impl From<UserEntity> for UserView {
    fn from(user: UserEntity) -> Self {
        Self {
            full_name: full_name(&user.first_name, &user.last_name),
            id: user.id,
            login: user.login,
            current_game_id: user.current_game_id,
            games_played: user.games_played,
        }
    }
}

impl From<UserFields> for NewUser {
    fn from(fields: UserFields) -> Self {
        Self {
            login: fields.login,
            first_name: fields.first_name,
            last_name: fields.last_name,
            games_played: 0,
            current_game_id: None,
        }
    }
}

impl NewUser {
    /// Attach an identifier, producing a full entity.
    pub fn with_id(self, id: Uuid) -> UserEntity {
        UserEntity {
            id,
            login: self.login,
            first_name: self.first_name,
            last_name: self.last_name,
            games_played: self.games_played,
            current_game_id: self.current_game_id,
        }
    }
}

/// Full replacement: fields missing from a replace body go back to defaults.
pub fn replacement_entity(id: Uuid, fields: UserFields) -> UserEntity {
    NewUser::from(fields).with_id(id)
}

impl From<&UserEntity> for UserPatchTarget {
    fn from(user: &UserEntity) -> Self {
        Self {
            login: user.login.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl UserEntity {
    /// Copy merged patch fields onto the entity. Id and game fields are kept.
    pub fn apply_fields(&mut self, fields: UserFields) {
        self.login = fields.login;
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
    }
}
