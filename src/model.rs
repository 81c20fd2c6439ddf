// User Store
// Copyright 2025 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! High-level data types.

use derive_getters::Getters;
use derive_more::{AsRef, Constructor};
use serde::{Deserialize, Serialize};

/// Indicates a problem constructing a model type from untrusted data.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct ModelError(pub(crate) String);

/// Result type for this module.
pub(crate) type ModelResult<T> = Result<T, ModelError>;

/// Newtype pattern for user record identifiers.
///
/// Identifiers are opaque strings that the store assigns at insertion time and
/// that are only ever compared for exact equality.
#[derive(AsRef, Clone, Constructor, Deserialize, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct UserId(String);

#[cfg(test)]
impl From<&'static str> for UserId {
    fn from(id: &'static str) -> Self {
        Self(id.to_owned())
    }
}

/// The caller-supplied fields of a user record, without an identifier.
///
/// All fields are guaranteed to be non-empty at construction time.  The store
/// pairs these details with a fresh `UserId` to mint a full `User`.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct UserDetails {
    /// The user's first name.
    first_name: String,

    /// The user's last name.
    last_name: String,

    /// The user's favorite hobby.
    hobby: String,
}

impl UserDetails {
    /// Creates the details for a new user record, making sure all fields carry a value.
    pub(crate) fn new<F, L, H>(first_name: F, last_name: L, hobby: H) -> ModelResult<Self>
    where
        F: Into<String>,
        L: Into<String>,
        H: Into<String>,
    {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let hobby = hobby.into();

        if first_name.is_empty() {
            return Err(ModelError("firstName cannot be empty".to_owned()));
        }
        if last_name.is_empty() {
            return Err(ModelError("lastName cannot be empty".to_owned()));
        }
        if hobby.is_empty() {
            return Err(ModelError("hobby cannot be empty".to_owned()));
        }

        Ok(Self { first_name, last_name, hobby })
    }
}

/// A partial set of replacement values for an existing user record.
///
/// Fields that are absent from the incoming payload deserialize to `None` and
/// leave the record untouched.  Unknown keys are discarded during
/// deserialization, and the record's identifier is never updatable.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Constructor, Debug))]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserUpdate {
    /// Replacement for the user's first name, if any.
    first_name: Option<String>,

    /// Replacement for the user's last name, if any.
    last_name: Option<String>,

    /// Replacement for the user's favorite hobby, if any.
    hobby: Option<String>,
}

/// A user record as stored and as served to clients.
#[derive(Clone, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    /// Unique identifier of the record, assigned by the store.
    id: UserId,

    /// The user's first name.
    first_name: String,

    /// The user's last name.
    last_name: String,

    /// The user's favorite hobby.
    hobby: String,
}

impl User {
    /// Creates a user record from its assigned `id` and validated `details`.
    pub(crate) fn new(id: UserId, details: UserDetails) -> Self {
        Self {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            hobby: details.hobby,
        }
    }

    /// Overwrites the fields carried in `update`, leaving all others untouched.
    ///
    /// The identifier is deliberately not part of `UserUpdate` so it cannot be
    /// rewritten here, which keeps identifiers unique for the lifetime of the
    /// store.
    pub(crate) fn merge(&mut self, update: UserUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(hobby) = update.hobby {
            self.hobby = hobby;
        }
    }
}
