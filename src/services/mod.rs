// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod mapper;
pub mod pagination;
pub mod patch;
pub mod users;
pub mod validation;

pub use pagination::{paginate, Page, PageRequest};
pub use patch::{merge, MergeError, PatchError, PatchOperation};
pub use users::{UserPage, UserService};
