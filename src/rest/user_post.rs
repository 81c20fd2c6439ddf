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

//! API to add a new user.

use crate::driver::Driver;
use crate::model::User;
use crate::rest::{validation, RestError};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{http, Json};
use serde::{Deserialize, Serialize};

/// Message sent to the server to add a user.
///
/// All fields are modeled as optional so that the handler can reply with the
/// canonical missing-fields message instead of a deserialization error.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserRequest {
    /// The user's first name.
    first_name: Option<String>,

    /// The user's last name.
    last_name: Option<String>,

    /// The user's favorite hobby.
    hobby: Option<String>,
}

/// Message sent by the server after adding a user.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CreateUserResponse {
    /// Human-readable outcome of the operation.
    message: String,

    /// The newly added record, including its assigned identifier.
    user: User,

    /// All records in the store after the insertion.
    users: Vec<User>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let details = validation::require_user_details(
        request.first_name,
        request.last_name,
        request.hobby,
    )?;
    let (user, users) = driver.create_user(details).await?;
    Ok((
        http::StatusCode::CREATED,
        Json(CreateUserResponse { message: "User Added".to_owned(), user, users }),
    ))
}
