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

//! Item catalog route definitions.

use axum::{routing::get, Router};

use super::handlers;

/// Build the router for the item catalog endpoints.
pub fn build_items_router() -> Router {
    Router::new().route("/items", get(handlers::list_items).post(handlers::create_item))
}
