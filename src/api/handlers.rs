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

//! Item catalog handlers.

use axum::Json;
use log::debug;

use super::error::ErrorResponse;
use super::extract::ValidatedJson;
use super::models::{catalog, Item};

/// List all items in the catalog
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "The fixed item catalog", body = [Item]),
    ),
    tag = "Items"
)]
pub async fn list_items() -> Json<Vec<Item>> {
    let items = catalog();
    debug!("Listing {} catalog items", items.len());
    Json(items)
}

/// Validate an item and echo it back
///
/// The item is not added to the catalog.
#[utoipa::path(
    post,
    path = "/items",
    request_body = Item,
    responses(
        (status = 200, description = "The submitted item, unchanged", body = Item),
        (status = 422, description = "Request body does not match the Item schema", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn create_item(ValidatedJson(item): ValidatedJson<Item>) -> Json<Item> {
    debug!("Echoing item {} ('{}')", item.id, item.name);
    Json(item)
}
