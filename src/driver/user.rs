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

//! Operations on a single user record.

use crate::db::DbError;
use crate::driver::{Driver, DriverError, DriverResult};
use crate::model::{User, UserDetails, UserId, UserUpdate};

/// Replaces the store's generic not-found error with the operation-specific `message`.
///
/// Each API historically reports a record miss with its own wording, so the
/// mapping to the user-visible text has to happen per operation.
fn not_found(e: DbError, message: &str) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound(message.to_owned()),
        e => e.into(),
    }
}

impl Driver {
    /// Appends a new record built from `details` and returns it along with the
    /// full contents of the store after the insertion.
    pub(crate) async fn create_user(self, details: UserDetails) -> DriverResult<(User, Vec<User>)> {
        let user = self.db.insert(details).await?;
        let users = self.db.list().await?;
        Ok((user, users))
    }

    /// Removes the record `id` and returns the remaining records.
    pub(crate) async fn delete_user(self, id: &UserId) -> DriverResult<Vec<User>> {
        self.db.remove(id).await.map_err(|e| not_found(e, "User Not Found"))?;
        let users = self.db.list().await?;
        Ok(users)
    }

    /// Gets the record whose identifier is exactly `id`.
    pub(crate) async fn get_user(self, id: &UserId) -> DriverResult<User> {
        let user = self.db.get_by_id(id).await.map_err(|e| not_found(e, "User not found"))?;
        Ok(user)
    }

    /// Overwrites the fields carried in `update` on the record `id` and returns
    /// the mutated record along with the full contents of the store.
    pub(crate) async fn update_user(
        self,
        id: &UserId,
        update: UserUpdate,
    ) -> DriverResult<(User, Vec<User>)> {
        let user = self
            .db
            .update_fields(id, update)
            .await
            .map_err(|e| not_found(e, "User with this ID does not exist"))?;
        let users = self.db.list().await?;
        Ok((user, users))
    }
}
