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

//! Item catalog record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog record.
///
/// No uniqueness is enforced on `id`; records are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Item identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unit price, unbounded
    pub price: f64,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// The fixed catalog served by `GET /items`, in listing order.
pub fn catalog() -> Vec<Item> {
    vec![Item::new(1, "Laptop", 1200.0), Item::new(2, "Mouse", 25.5)]
}
