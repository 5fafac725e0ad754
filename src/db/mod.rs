// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer for user records.
//!
//! Handlers never talk to a concrete store; they receive an
//! `Arc<dyn UserStore>` built by the process entry point.

pub mod memory;

pub use memory::InMemoryUserStore;

use crate::models::{NewUser, UserEntity};
use async_trait::async_trait;
use uuid::Uuid;

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Result of a read-modify-write on one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Missing,
    Unchanged,
    Updated,
}

/// Computes a replacement from the current entity, or `None` to keep it.
pub type Mutation<'a> = Box<dyn FnOnce(&UserEntity) -> Option<UserEntity> + Send + 'a>;

/// One window of a paged scan, with the total taken from the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct StorePage {
    pub items: Vec<UserEntity>,
    pub total_count: u64,
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User {0} already exists")]
    Conflict(Uuid),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for user entities.
///
/// Every method is atomic with respect to the others. `upsert` in particular
/// must decide between insert and replace inside a single operation; callers
/// never check existence first and then write.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Snapshot read of a single user.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, StoreError>;

    /// Insert a new user under a freshly generated identifier.
    async fn insert(&self, user: NewUser) -> Result<UserEntity, StoreError>;

    /// Run `mutation` against the current user and store its result, with
    /// no other write to that user in between. The id is never changed.
    async fn update_with<'a>(
        &'a self,
        id: Uuid,
        mutation: Mutation<'a>,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Replace the user if present, otherwise insert it with its own id.
    async fn upsert(&self, user: UserEntity) -> Result<UpsertOutcome, StoreError>;

    /// Remove a user. Returns `false` if the id is absent.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// At most `take` users starting at offset `skip`, in a stable order.
    async fn page(&self, skip: u64, take: u64) -> Result<StorePage, StoreError>;

    /// Number of stored users.
    async fn count(&self) -> Result<u64, StoreError>;
}
