// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User resource operations.
//!
//! Each operation validates, maps, and performs exactly one store write.
//! Nothing is cached between calls; every operation re-reads the store.

use crate::db::{UpdateOutcome, UpsertOutcome, UserStore};
use crate::error::{AppError, Result};
use crate::models::{
    CreateUserRequest, NewUser, ReplaceUserRequest, UserEntity, UserPatchTarget, UserView,
};
use crate::services::mapper::replacement_entity;
use crate::services::pagination::{build_links, Page, PageLinks, PageRequest};
use crate::services::patch::{merge_validated, MergeError, PatchOperation};
use std::sync::Arc;
use uuid::Uuid;

/// One page of the user listing.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<UserView>,
    pub page: Page,
    pub links: PageLinks,
}

/// User operations over an injected store.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User {id} not found"))
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Fetch the read view of a user.
    pub async fn get(&self, id: Uuid) -> Result<UserView> {
        let user = self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(UserView::from(user))
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.store.find_by_id(id).await?.is_some())
    }

    /// Create a user and return its server-assigned id.
    pub async fn create(&self, request: CreateUserRequest) -> Result<Uuid> {
        let fields = request.into_fields()?;
        let user = self.store.insert(NewUser::from(fields)).await?;

        tracing::info!(user_id = %user.id, login = %user.login, "User created");
        Ok(user.id)
    }

    /// Replace the user at `id`, creating it if absent.
    ///
    /// Fields not carried by the request are reset to their defaults.
    pub async fn upsert(&self, id: Uuid, request: ReplaceUserRequest) -> Result<UpsertOutcome> {
        let fields = request.into_fields()?;
        let outcome = self.store.upsert(replacement_entity(id, fields)).await?;

        tracing::info!(user_id = %id, outcome = ?outcome, "User upserted");
        Ok(outcome)
    }

    /// Apply a patch document. Nothing is written unless the whole document
    /// applies and the result passes validation.
    ///
    /// The merge runs inside the store's update, so a concurrent write to the
    /// same user cannot land between reading it and committing the patch.
    pub async fn patch(&self, id: Uuid, operations: &[PatchOperation]) -> Result<()> {
        let mut failure: Option<MergeError> = None;
        let outcome = self
            .store
            .update_with(
                id,
                Box::new(|current: &UserEntity| {
                    match merge_validated(&UserPatchTarget::from(current), operations) {
                        Ok(fields) => {
                            let mut patched = current.clone();
                            patched.apply_fields(fields);
                            Some(patched)
                        }
                        Err(e) => {
                            failure = Some(e);
                            None
                        }
                    }
                }),
            )
            .await?;

        if let Some(e) = failure {
            return Err(e.into());
        }
        if outcome == UpdateOutcome::Missing {
            return Err(not_found(id));
        }

        tracing::info!(user_id = %id, operations = operations.len(), "User patched");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Number of stored users.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }

    /// List one page of users. `route` is the absolute listing URL that
    /// navigation links are built against.
    pub async fn list(&self, request: PageRequest, route: &str) -> Result<UserPage> {
        let scan = self.store.page(request.skip(), request.size).await?;
        let page = Page::new(scan.total_count, request);
        let links = build_links(
            route,
            page.current_page,
            page.page_size,
            page.has_next,
            page.has_previous,
        );

        tracing::debug!(
            page = page.current_page,
            size = page.page_size,
            total = page.total_count,
            returned = scan.items.len(),
            "Listed users"
        );

        Ok(UserPage {
            users: scan.items.into_iter().map(UserView::from).collect(),
            page,
            links,
        })
    }
}
