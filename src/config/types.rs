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

//! Configuration structures.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::docs::ScalarTheme;

/// Log levels accepted by `logLevel`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub docs: DocsSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            docs: DocsSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("host must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(anyhow!(
                "invalid logLevel '{}'. Valid levels: {LOG_LEVELS:?}",
                self.log_level
            ));
        }
        if self.docs.scalar_title.trim().is_empty() {
            return Err(anyhow!("docs.scalarTitle must not be empty"));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the documentation views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsSettings {
    /// Page title of the Scalar view
    #[serde(default = "default_scalar_title")]
    pub scalar_title: String,
    /// Scalar theme; `none` omits the theme setting
    #[serde(default)]
    pub scalar_theme: ScalarTheme,
    #[serde(default)]
    pub hide_client_button: bool,
    #[serde(default)]
    pub hide_download_button: bool,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            scalar_title: default_scalar_title(),
            scalar_theme: ScalarTheme::default(),
            hide_client_button: false,
            hide_download_button: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_scalar_title() -> String {
    "📖 API Docs - Scalar".to_string()
}
