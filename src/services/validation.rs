// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field rules for inbound user representations.
//!
//! Mutation requests are rejected with every violated rule reported at once.
//! Listing parameters are never rejected; see `services::pagination`.

use crate::models::{CreateUserRequest, UserFields, UserPatchTarget};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const LOGIN_MESSAGE: &str =
    "Login must consist only of letters and digits and should not be empty";

/// A login is non-empty and made only of letters and digits (any script).
pub fn is_valid_login(login: &str) -> bool {
    !login.is_empty() && login.chars().all(char::is_alphanumeric)
}

fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn check_required(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        errors.add(field, field_error("required", format!("{field} is required")));
    }
}

/// Run every user field rule and collect all failures.
fn check_user_fields(
    login: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match login {
        None => check_required(&mut errors, "login", None),
        Some(login) if !is_valid_login(login) => {
            errors.add("login", field_error("login", LOGIN_MESSAGE));
        }
        Some(_) => {}
    }
    check_required(&mut errors, "firstName", first_name);
    check_required(&mut errors, "lastName", last_name);

    errors
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = check_user_fields(
            self.login.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for UserPatchTarget {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = check_user_fields(
            Some(self.login.as_str()),
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl CreateUserRequest {
    /// Validate and take ownership of the fields.
    pub fn into_fields(self) -> Result<UserFields, ValidationErrors> {
        self.validate()?;
        Ok(UserFields {
            login: self.login.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        })
    }
}

impl UserPatchTarget {
    /// Validate a merged patch target and take ownership of its fields.
    pub fn into_fields(self) -> Result<UserFields, ValidationErrors> {
        self.validate()?;
        Ok(UserFields {
            login: self.login,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}
