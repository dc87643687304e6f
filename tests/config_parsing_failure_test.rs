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

//! Integration tests for config parsing failures.
//!
//! These tests verify that the config loader rejects invalid configurations
//! with error messages naming the offending field or value.

use item_catalog_server::config::load_config_file;
use item_catalog_server::docs::ScalarTheme;
use std::fs;
use tempfile::TempDir;

/// Helper to write YAML to a temp file and attempt to load it
fn try_load_config(yaml: &str) -> Result<(), String> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("test-config.yaml");
    fs::write(&config_path, yaml).expect("Failed to write config file");

    match load_config_file(&config_path) {
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Helper to assert that loading fails with a specific field mentioned in error
fn assert_fails_with_field(yaml: &str, expected_field: &str) {
    let result = try_load_config(yaml);
    assert!(
        result.is_err(),
        "Config should fail to load, but it succeeded"
    );
    let err = result.expect_err("Expected error");
    assert!(
        err.contains(expected_field),
        "Error should mention '{expected_field}' but got: {err}"
    );
}

#[test]
fn test_load_fails_with_snake_case_log_level() {
    let yaml = r#"
host: 0.0.0.0
port: 8080
log_level: info
"#;
    assert_fails_with_field(yaml, "log_level");
}

#[test]
fn test_load_fails_with_snake_case_docs_field() {
    let yaml = r#"
docs:
  scalar_theme: purple
"#;
    assert_fails_with_field(yaml, "scalar_theme");
}

#[test]
fn test_load_fails_with_unknown_theme() {
    let yaml = r#"
docs:
  scalarTheme: neon
"#;
    assert_fails_with_field(yaml, "neon");
}

#[test]
fn test_load_fails_with_unknown_log_level() {
    let yaml = r#"
logLevel: chatty
"#;
    assert_fails_with_field(yaml, "chatty");
}

#[test]
fn test_load_fails_with_port_out_of_range() {
    let yaml = r#"
port: 70000
"#;
    assert!(try_load_config(yaml).is_err());
}

#[test]
fn test_load_fails_with_unparseable_file() {
    let yaml = "host: [unclosed";
    assert!(try_load_config(yaml).is_err());
}

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("server.yaml");
    fs::write(
        &config_path,
        r#"
host: 0.0.0.0
port: 8080
logLevel: warn
docs:
  scalarTitle: Catalog Reference
  scalarTheme: none
  hideClientButton: true
  hideDownloadButton: false
"#,
    )
    .expect("Failed to write config file");

    let config = load_config_file(&config_path).expect("Config should load");
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.docs.scalar_title, "Catalog Reference");
    assert_eq!(config.docs.scalar_theme, ScalarTheme::NoTheme);
    assert!(config.docs.hide_client_button);
    assert!(!config.docs.hide_download_button);
}
