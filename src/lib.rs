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

//! REST service to manage an in-memory directory of users.
//!
//! The crate adheres to a layered architecture:
//!
//! 1.  `model`: The base layer, providing high-level data types that represent
//!     concepts in the domain of the application.
//!
//! 1.  `db`: The record store layer.  The `UserStore` trait expresses the
//!     operations the service needs, and `db::memory` supplies the
//!     process-local implementation that backs the running service.
//!
//! 1.  `driver`: The business logic layer.  The `Driver` type encapsulates the
//!     injected store and coordinates access to it.
//!
//! 1.  `rest`: The HTTP layer, offering the REST APIs.  Every API is backed by
//!     a state object of type `Driver`, and a logging layer observes every
//!     outgoing response.
//!
//! 1.  `main`: The app launcher.  Its sole purpose is to gather configuration
//!     data from environment variables and call `crate::serve`.
//!
//! There are result and error types in every layer, such as `DbResult` and
//! `DbError`.  Errors transparently float to the top of the app using the `?`
//! operator, being translated to HTTP status codes once returned from the REST
//! layer.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use crate::db::memory::MemoryStore;
use driver::Driver;
use log::info;
use rest::app;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

mod db;
mod driver;
mod model;
mod rest;

/// Instantiates all resources to serve the application on `bind_addr`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(bind_addr: impl Into<SocketAddr>) -> Result<(), Box<dyn Error>> {
    let db = Arc::new(MemoryStore::with_seed_users());
    let driver = Driver::new(db);
    let app = app(driver);

    let addr = bind_addr.into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
