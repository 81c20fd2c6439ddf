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

//! API to get a single user by its identifier.

use crate::driver::Driver;
use crate::model::{User, UserId};
use crate::rest::{EmptyBody, RestError};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Message sent by the server with the requested user.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct GetUserResponse {
    /// Human-readable outcome of the operation.
    message: String,

    /// The record whose identifier matched the request.
    user: User,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<UserId>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let user = driver.get_user(&id).await?;
    Ok(Json(GetUserResponse { message: "Found user".to_owned(), user }))
}
