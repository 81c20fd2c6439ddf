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

//! API to update an existing user.
//!
//! Updates are partial: fields absent from the payload keep their current
//! values, and unknown keys are silently ignored.

use crate::driver::Driver;
use crate::model::{User, UserId, UserUpdate};
use crate::rest::RestError;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{http, Json};
use serde::Serialize;

/// Message sent by the server after updating a user.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct UpdateUserResponse {
    /// Human-readable outcome of the operation.
    message: String,

    /// The record after the update was applied.
    user: User,

    /// All records in the store after the update.
    users: Vec<User>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    Json(update): Json<UserUpdate>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let (user, users) = driver.update_user(&id, update).await?;
    Ok((
        http::StatusCode::ACCEPTED,
        Json(UpdateUserResponse { message: "User Updated".to_owned(), user, users }),
    ))
}
