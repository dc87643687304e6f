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

use anyhow::Result;
use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;

use crate::app::{build_router, AppConfig};
use crate::config::ServerConfig;
use crate::api::OPENAPI_PATH;
use crate::docs::{DOCS_PATH, REDOC_PATH, SWAGGER_PATH};

pub struct CatalogServer {
    config: ServerConfig,
    app_config: AppConfig,
}

impl CatalogServer {
    /// Create a server, resolving the documentation renderer once.
    pub fn new(config: ServerConfig) -> Self {
        let app_config = AppConfig::initialize(&config.docs);
        Self::with_app_config(config, app_config)
    }

    /// Create a server from an already resolved application configuration
    pub fn with_app_config(config: ServerConfig, app_config: AppConfig) -> Self {
        Self { config, app_config }
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn router(&self) -> Router {
        build_router(&self.app_config)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an existing listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let app = self.router();

        info!("Starting item catalog API on {addr}");
        info!(
            "Docs at http://{addr}{DOCS_PATH} ({})",
            self.app_config.canonical_docs.name()
        );
        info!("Swagger UI available at http://{addr}{SWAGGER_PATH}");
        info!("ReDoc available at http://{addr}{REDOC_PATH}");
        info!("OpenAPI document at http://{addr}{OPENAPI_PATH}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Item catalog API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
