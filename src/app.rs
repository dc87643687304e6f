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

//! Application composition.
//!
//! [`AppConfig`] is resolved once during startup and is read-only afterwards.
//! [`build_router`] turns it into the complete HTTP surface.

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::OpenApi;

use crate::api::{self, ApiDoc};
use crate::config::DocsSettings;
use crate::docs::{self, RendererChoice};

/// Immutable startup configuration shared by all routes.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API description document, generated once.
    pub openapi: OpenApiDocument,
    /// Renderer backing the canonical `/docs` path.
    pub canonical_docs: RendererChoice,
}

impl AppConfig {
    /// Generate the description document and detect the optional renderer.
    pub fn initialize(settings: &DocsSettings) -> Self {
        Self::with_renderer(RendererChoice::detect(settings))
    }

    /// Build the configuration around an already resolved renderer choice.
    pub fn with_renderer(canonical_docs: RendererChoice) -> Self {
        Self {
            openapi: ApiDoc::openapi(),
            canonical_docs,
        }
    }
}

/// Build the main application router.
pub fn build_router(config: &AppConfig) -> Router {
    Router::new()
        .merge(api::build_items_router())
        .merge(docs::build_docs_router(
            &config.openapi,
            &config.canonical_docs,
        ))
        .fallback(api::error::not_found)
        .layer(CorsLayer::permissive())
}
