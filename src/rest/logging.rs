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

//! Middleware to log the outcome of every request.
//!
//! The log record captures the method, URI, status code, and the `message`
//! field of the JSON response body, which every API in this service emits as
//! part of its envelope.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::info;

/// Fallback text used when the response body carries no message field.
const NO_MESSAGE: &str = "response is not JSON or has no message";

/// Extracts the `message` field of the JSON payload in `bytes`, if there is one.
fn extract_message(bytes: &[u8]) -> Option<String> {
    let json = serde_json::from_slice::<serde_json::Value>(bytes).ok()?;
    Some(json.get("message")?.as_str()?.to_owned())
}

/// Logs every finalized response as it leaves the router.
///
/// Buffers the response body to peek at its message and then reassembles it
/// unmodified.  All bodies in this service are small in-memory JSON objects so
/// the buffering is harmless.
pub(crate) async fn log_response(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let message = extract_message(&bytes);
    info!(
        "{} {} -> {} ({})",
        method,
        uri,
        parts.status,
        message.as_deref().unwrap_or(NO_MESSAGE)
    );
    Response::from_parts(parts, Body::from(bytes))
}
