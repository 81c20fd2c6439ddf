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

//! Record store abstraction in terms of the operations needed by the server.
//!
//! The operations are expressed as an async trait so that a persistent
//! backing store can later be substituted for the in-memory one without
//! touching the driver or the HTTP layer.

use crate::model::{User, UserDetails, UserId, UserUpdate};
use async_trait::async_trait;

pub(crate) mod memory;

/// Store errors.  Any unexpected errors that come from the backing store are
/// classified as `BackendError`, but errors we know about have more specific types.
#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum DbError {
    /// Catch-all error type for unexpected store errors.
    #[error("Store error: {0}")]
    BackendError(String),

    /// Indicates that a requested record does not exist.
    #[error("Entity not found")]
    NotFound,
}

/// Result type for this module.
pub(crate) type DbResult<T> = Result<T, DbError>;

/// A store of user records with high-level operations that deal with our types.
#[async_trait]
pub(crate) trait UserStore {
    /// Gets all records currently in the store, in insertion order.
    async fn list(&self) -> DbResult<Vec<User>>;

    /// Gets the record whose identifier exactly equals `id`.
    async fn get_by_id(&self, id: &UserId) -> DbResult<User>;

    /// Appends a new record built from `details`, assigning it a fresh identifier.
    async fn insert(&self, details: UserDetails) -> DbResult<User>;

    /// Overwrites the fields carried in `update` on the record `id`, in place,
    /// and returns the mutated record.
    async fn update_fields(&self, id: &UserId, update: UserUpdate) -> DbResult<User>;

    /// Removes the record `id`, preserving the order of all other records.
    async fn remove(&self, id: &UserId) -> DbResult<()>;
}
