// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Users API: a resource-oriented HTTP interface over a user store.
//!
//! Requests are validated, mapped onto the stored entity (or merged for
//! PATCH), written through a [`db::UserStore`], and mapped back to a read
//! view. Listing adds page metadata and navigation links.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::UserStore;
use services::UserService;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub users: UserService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            users: UserService::new(store),
        }
    }
}
