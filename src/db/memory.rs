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

//! In-memory implementation of the record store.

use crate::db::{DbError, DbResult, UserStore};
use crate::model::{User, UserDetails, UserId, UserUpdate};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// Users present in the store when the process starts.
const SEED_USERS: [(&str, &str, &str, &str); 5] = [
    ("1", "Uday", "Kalyan", "Learning"),
    ("2", "Ananya", "Sharma", "Reading"),
    ("3", "Rahul", "Verma", "Traveling"),
    ("4", "Sanjana", "Iyer", "Cooking"),
    ("5", "Arjun", "Patel", "Gaming"),
];

/// Mutable contents of the store, kept together under a single lock.
struct State {
    /// The records, in insertion order.
    users: Vec<User>,

    /// Numeric value of the last identifier handed out.  Increases on every
    /// insertion and never decreases, so identifiers are not reused after
    /// deletions.
    last_id: u64,
}

/// A record store backed by process-local memory.  Contents do not survive a
/// restart.
pub(crate) struct MemoryStore {
    /// The store's contents.
    state: Mutex<State>,
}

impl MemoryStore {
    /// Creates a store populated with the fixed seed records.
    pub(crate) fn with_seed_users() -> Self {
        let users: Vec<User> = SEED_USERS
            .iter()
            .map(|(id, first_name, last_name, hobby)| {
                let details = UserDetails::new(*first_name, *last_name, *hobby)
                    .expect("Seed fields are known to be non-empty");
                User::new(UserId::new((*id).to_owned()), details)
            })
            .collect();

        let last_id = users
            .iter()
            .filter_map(|user| user.id().as_ref().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self { state: Mutex::new(State { users, last_id }) }
    }

    /// Locks the store's state, converting lock poisoning into a store error.
    fn lock(&self) -> DbResult<MutexGuard<'_, State>> {
        self.state.lock().map_err(|e| DbError::BackendError(e.to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> DbResult<Vec<User>> {
        let state = self.lock()?;
        Ok(state.users.clone())
    }

    async fn get_by_id(&self, id: &UserId) -> DbResult<User> {
        let state = self.lock()?;
        state.users.iter().find(|user| user.id() == id).cloned().ok_or(DbError::NotFound)
    }

    async fn insert(&self, details: UserDetails) -> DbResult<User> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let user = User::new(UserId::new(state.last_id.to_string()), details);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_fields(&self, id: &UserId, update: UserUpdate) -> DbResult<User> {
        let mut state = self.lock()?;
        let user =
            state.users.iter_mut().find(|user| user.id() == id).ok_or(DbError::NotFound)?;
        user.merge(update);
        Ok(user.clone())
    }

    async fn remove(&self, id: &UserId) -> DbResult<()> {
        let mut state = self.lock()?;
        let old_len = state.users.len();
        state.users.retain(|user| user.id() != id);
        if state.users.len() == old_len {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}
