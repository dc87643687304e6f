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

//! Configuration management for the item catalog server.
//!
//! - Type-safe configuration structures
//! - YAML and JSON file loading
//! - Unknown field detection and value validation
//!
//! # Configuration File Example
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8000
//! logLevel: info
//! docs:
//!   scalarTitle: "API Docs - Scalar"
//!   scalarTheme: purple   # or `none` to leave the theme unset
//!   hideClientButton: false
//!   hideDownloadButton: false
//! ```

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{from_yaml_str, load_config_file, ConfigError};
pub use types::{DocsSettings, ServerConfig, LOG_LEVELS};
