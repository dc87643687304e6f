// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! REST API implementation for the item catalog.
//!
//! ## API Structure
//!
//! ```text
//! GET  /items          - List the fixed item catalog
//! POST /items          - Validate an item and echo it back
//! GET  /openapi.json   - API description document
//! ```
//!
//! ## Module Organization
//!
//! - `models` - The `Item` record and the fixed catalog
//! - `handlers` - Request handlers
//! - `extract` - Validating JSON body extractor
//! - `error` - Error types and their HTTP mapping
//! - `openapi` - OpenAPI document derivation
//! - `routes` - Route builder

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;

pub use error::{ApiError, ErrorDetail, ErrorResponse};
pub use handlers::*;
pub use models::{catalog, Item};
pub use openapi::{ApiDoc, OPENAPI_PATH};
pub use routes::build_items_router;
