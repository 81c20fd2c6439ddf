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

//! API to delete a user.

use crate::driver::Driver;
use crate::model::{User, UserId};
use crate::rest::{EmptyBody, RestError};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Message sent by the server after deleting a user.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct DeleteUserResponse {
    /// Human-readable outcome of the operation.
    message: String,

    /// All records remaining in the store after the deletion.
    users: Vec<User>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let users = driver.delete_user(&id).await?;
    Ok(Json(DeleteUserResponse { message: "User Deleted".to_owned(), users }))
}
