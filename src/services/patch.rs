// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON Patch (RFC 6902) interpreter over [`UserPatchTarget`].
//!
//! Operations run in order against a working copy. The first failing
//! operation aborts the whole document and the caller's target is left as it
//! was. A structurally successful merge is then re-validated with the same
//! rules as create and replace.

use crate::models::{UserFields, UserPatchTarget};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

/// A single patch operation. `add` is accepted as a synonym of `replace`
/// since every patch target field always exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    #[serde(rename = "replace", alias = "add")]
    Set { path: String, value: Value },
    Remove { path: String },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// Patch target fields addressable by a JSON pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchField {
    Login,
    FirstName,
    LastName,
}

impl PatchField {
    /// Resolve a top-level JSON pointer such as `/firstName`.
    pub fn from_pointer(pointer: &str) -> Option<Self> {
        match pointer.strip_prefix('/')? {
            "login" => Some(Self::Login),
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            _ => None,
        }
    }

    fn get(self, target: &UserPatchTarget) -> &String {
        match self {
            Self::Login => &target.login,
            Self::FirstName => &target.first_name,
            Self::LastName => &target.last_name,
        }
    }

    fn slot(self, target: &mut UserPatchTarget) -> &mut String {
        match self {
            Self::Login => &mut target.login,
            Self::FirstName => &mut target.first_name,
            Self::LastName => &mut target.last_name,
        }
    }
}

/// Why a single operation could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchFailure {
    #[error("no such field: {0}")]
    UnknownField(String),

    #[error("{0} expects a string value")]
    InvalidValue(String),

    #[error("test failed at {0}")]
    TestFailed(String),
}

/// Structural patch failure, tagged with the index of the failing operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("operation {operation_index}: {reason}")]
pub struct PatchError {
    pub operation_index: usize,
    pub reason: PatchFailure,
}

/// Outcome of a merge that did not produce a committable user.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("merged user failed validation: {0}")]
    ValidationFailed(ValidationErrors),
}

fn resolve(pointer: &str) -> Result<PatchField, PatchFailure> {
    PatchField::from_pointer(pointer)
        .ok_or_else(|| PatchFailure::UnknownField(pointer.to_string()))
}

fn string_value(pointer: &str, value: &Value) -> Result<String, PatchFailure> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| PatchFailure::InvalidValue(pointer.to_string()))
}

fn apply(target: &mut UserPatchTarget, operation: &PatchOperation) -> Result<(), PatchFailure> {
    match operation {
        PatchOperation::Set { path, value } => {
            let field = resolve(path)?;
            *field.slot(target) = string_value(path, value)?;
        }
        PatchOperation::Remove { path } => {
            resolve(path)?.slot(target).clear();
        }
        PatchOperation::Move { from, path } => {
            let source = resolve(from)?;
            let dest = resolve(path)?;
            let value = std::mem::take(source.slot(target));
            *dest.slot(target) = value;
        }
        PatchOperation::Copy { from, path } => {
            let source = resolve(from)?;
            let dest = resolve(path)?;
            let value = source.get(target).clone();
            *dest.slot(target) = value;
        }
        PatchOperation::Test { path, value } => {
            let field = resolve(path)?;
            if value.as_str() != Some(field.get(target).as_str()) {
                return Err(PatchFailure::TestFailed(path.clone()));
            }
        }
    }
    Ok(())
}

/// Apply `operations` in order to a copy of `target`.
pub fn merge(
    target: &UserPatchTarget,
    operations: &[PatchOperation],
) -> Result<UserPatchTarget, PatchError> {
    let mut working = target.clone();
    for (operation_index, operation) in operations.iter().enumerate() {
        apply(&mut working, operation).map_err(|reason| PatchError {
            operation_index,
            reason,
        })?;
    }
    Ok(working)
}

/// Merge and then re-validate, yielding fields ready to commit.
pub fn merge_validated(
    target: &UserPatchTarget,
    operations: &[PatchOperation],
) -> Result<UserFields, MergeError> {
    merge(target, operations)?
        .into_fields()
        .map_err(MergeError::ValidationFailed)
}
