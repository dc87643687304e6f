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

//! Documentation gateway.
//!
//! Serves the API description document and the human-facing views built
//! from it:
//!
//! ```text
//! /openapi.json  - API description document
//! /swagger       - Swagger UI
//! /redoc         - ReDoc
//! /docs          - Scalar, or Swagger UI when Scalar is not compiled in
//! /              - Landing page linking to the three views
//! ```

pub mod landing;
pub mod renderer;
pub mod templates;

use axum::{response::Html, routing::get, Json, Router};
use log::warn;
use utoipa::openapi::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::api::OPENAPI_PATH;
pub use renderer::{scalar_available, RendererChoice, ScalarOptions, ScalarTheme};

pub const DOCS_PATH: &str = "/docs";
pub const SWAGGER_PATH: &str = "/swagger";
pub const REDOC_PATH: &str = "/redoc";
pub const LANDING_PATH: &str = "/";

/// Build the router for every documentation route.
pub fn build_docs_router(openapi: &OpenApi, canonical: &RendererChoice) -> Router {
    let document = openapi.clone();

    Router::new()
        .route(
            OPENAPI_PATH,
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
        .route(SWAGGER_PATH, get(swagger_page))
        .merge(Redoc::with_url(REDOC_PATH, openapi.clone()).custom_html(templates::redoc_html()))
        .merge(canonical_docs_router(openapi, canonical))
        .route(LANDING_PATH, get(landing::landing_page))
}

fn canonical_docs_router(openapi: &OpenApi, canonical: &RendererChoice) -> Router {
    match canonical {
        RendererChoice::Scalar(options) => scalar_router(openapi, options),
        RendererChoice::Swagger => swagger_fallback_router(),
    }
}

async fn swagger_page() -> Html<String> {
    Html(templates::swagger_html(OPENAPI_PATH))
}

/// Swagger UI duplicated at the canonical path.
fn swagger_fallback_router() -> Router {
    Router::new().route(DOCS_PATH, get(swagger_page))
}

#[cfg(feature = "scalar")]
fn scalar_router(openapi: &OpenApi, options: &ScalarOptions) -> Router {
    use utoipa_scalar::{Scalar, Servable as _};

    Scalar::with_url(DOCS_PATH, openapi.clone())
        .custom_html(templates::scalar_html(options))
        .into()
}

// Reached only when a Scalar choice is built by hand, e.g. through
// `AppConfig::with_renderer`; `RendererChoice::detect` never resolves it here.
#[cfg(not(feature = "scalar"))]
fn scalar_router(_openapi: &OpenApi, _options: &ScalarOptions) -> Router {
    warn!("Scalar renderer is not compiled in; serving Swagger UI at {DOCS_PATH}");
    swagger_fallback_router()
}
