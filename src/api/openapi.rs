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

//! OpenAPI documentation for the item API.
//!
//! The document is served at `/openapi.json` and rendered by every
//! documentation view. Documentation routes themselves are not listed.

use utoipa::OpenApi;

use super::error::{ErrorDetail, ErrorResponse};
use super::models::Item;

/// Path the API description document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::list_items, super::handlers::create_item),
    components(schemas(Item, ErrorResponse, ErrorDetail)),
    tags(
        (name = "Items", description = "Item catalog"),
    ),
    info(
        title = "Item Catalog API",
        version = "1.0.0",
        description = "Item catalog REST API.\n\nDocumentation is available through **Swagger UI**, **ReDoc** and **Scalar**:\n\n- `/docs` - Scalar API reference (Swagger UI when Scalar is not compiled in)\n- `/swagger` - Swagger UI\n- `/redoc` - ReDoc",
        contact(name = "Item Catalog Maintainers"),
        license(
            name = "MIT License",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
