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

//! Configuration file loading.

use std::fs;
use std::path::Path;

use super::types::ServerConfig;
use super::validation::{validate_config, ValidationError};

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("{0}")]
    UnknownFields(#[from] ValidationError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Parse and validate a configuration document held in memory.
pub fn from_yaml_str(s: &str) -> Result<ServerConfig, ConfigError> {
    let value: serde_yaml::Value = serde_yaml::from_str(s)?;
    from_value(value)
}

/// Load a `ServerConfig` from a YAML or JSON file.
///
/// The file is parsed as YAML first and as JSON if that fails. Unknown
/// fields and invalid values are rejected.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;

    let value = match serde_yaml::from_str::<serde_yaml::Value>(&content) {
        Ok(value) => value,
        Err(yaml_err) => match serde_json::from_str::<serde_yaml::Value>(&content) {
            Ok(value) => value,
            Err(json_err) => {
                return Err(ConfigError::ParseError {
                    path: path_ref.display().to_string(),
                    yaml_err: yaml_err.to_string(),
                    json_err: json_err.to_string(),
                });
            }
        },
    };

    from_value(value)
}

fn from_value(value: serde_yaml::Value) -> Result<ServerConfig, ConfigError> {
    // An empty file parses as null
    if value.is_null() {
        return Ok(ServerConfig::default());
    }

    validate_config(&value)?;
    let config: ServerConfig = serde_yaml::from_value(value)?;
    config.validate()?;
    Ok(config)
}
