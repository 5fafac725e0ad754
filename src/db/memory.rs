// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory user store backed by `DashMap`.
//!
//! Listing order is insertion order: every inserted user gets a sequence
//! number that survives replaces and updates.

use super::{Mutation, StoreError, StorePage, UpdateOutcome, UpsertOutcome, UserStore};
use crate::models::{NewUser, UserEntity};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

struct StoredUser {
    seq: u64,
    user: UserEntity,
}

/// In-memory storage for local development and tests.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: DashMap<Uuid, StoredUser>,
    next_seq: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, StoreError> {
        Ok(self.users.get(&id).map(|stored| stored.user.clone()))
    }

    async fn insert(&self, user: NewUser) -> Result<UserEntity, StoreError> {
        let id = Uuid::new_v4();
        match self.users.entry(id) {
            Entry::Occupied(_) => Err(StoreError::Conflict(id)),
            Entry::Vacant(slot) => {
                let user = user.with_id(id);
                slot.insert(StoredUser {
                    seq: self.next_seq(),
                    user: user.clone(),
                });
                Ok(user)
            }
        }
    }

    async fn update_with<'a>(
        &'a self,
        id: Uuid,
        mutation: Mutation<'a>,
    ) -> Result<UpdateOutcome, StoreError> {
        // The shard stays write-locked while the mutation runs
        let Some(mut stored) = self.users.get_mut(&id) else {
            return Ok(UpdateOutcome::Missing);
        };
        match mutation(&stored.user) {
            Some(mut user) => {
                user.id = id;
                stored.user = user;
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::Unchanged),
        }
    }

    async fn upsert(&self, user: UserEntity) -> Result<UpsertOutcome, StoreError> {
        // The entry guard holds the shard lock across the existence check and
        // the write.
        match self.users.entry(user.id) {
            Entry::Occupied(mut slot) => {
                slot.get_mut().user = user;
                Ok(UpsertOutcome::Replaced)
            }
            Entry::Vacant(slot) => {
                slot.insert(StoredUser {
                    seq: self.next_seq(),
                    user,
                });
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.users.remove(&id).is_some())
    }

    async fn page(&self, skip: u64, take: u64) -> Result<StorePage, StoreError> {
        let mut snapshot: Vec<(u64, UserEntity)> = self
            .users
            .iter()
            .map(|stored| (stored.seq, stored.user.clone()))
            .collect();
        snapshot.sort_by_key(|(seq, _)| *seq);

        let total_count = snapshot.len() as u64;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);

        let items = snapshot
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|(_, user)| user)
            .collect();

        Ok(StorePage { items, total_count })
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.users.len() as u64)
    }
}
