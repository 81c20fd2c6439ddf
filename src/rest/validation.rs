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

//! Field-presence validation for the APIs that take full user details.

use crate::model::UserDetails;
use crate::rest::{RestError, RestResult};

/// Error message returned when any required field is absent, null, or empty.
pub(crate) const REQUIRED_FIELDS_MESSAGE: &str =
    "All fields (firstName, lastName, hobby) are required";

/// Builds the validated details for a new user record.
///
/// Every field must be present and non-empty.  All rejections use the same
/// message regardless of which field is to blame, and happen before the store
/// is touched.
pub(crate) fn require_user_details(
    first_name: Option<String>,
    last_name: Option<String>,
    hobby: Option<String>,
) -> RestResult<UserDetails> {
    match (first_name, last_name, hobby) {
        (Some(first_name), Some(last_name), Some(hobby)) => {
            UserDetails::new(first_name, last_name, hobby)
                .map_err(|_| RestError::InvalidRequest(REQUIRED_FIELDS_MESSAGE.to_owned()))
        }
        _ => Err(RestError::InvalidRequest(REQUIRED_FIELDS_MESSAGE.to_owned())),
    }
}
