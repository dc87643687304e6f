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

//! Configuration field validation.
//!
//! Catches typos and snake_case spellings that serde defaults would otherwise
//! silently ignore.

use std::collections::HashSet;

/// Validation error for unknown configuration fields.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown field '{field}' in {context}. Valid fields are: {valid_fields}")]
    UnknownField {
        field: String,
        context: String,
        valid_fields: String,
    },

    #[error("Multiple validation errors:\n{}", .0.join("\n"))]
    Multiple(Vec<String>),
}

/// Known fields for server-level configuration.
const SERVER_FIELDS: &[&str] = &["host", "port", "logLevel", "docs"];

/// Known fields for the `docs` section.
const DOCS_FIELDS: &[&str] = &[
    "scalarTitle",
    "scalarTheme",
    "hideClientButton",
    "hideDownloadButton",
];

/// Validate a configuration value and return all unknown field errors.
pub fn validate_config(value: &serde_yaml::Value) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if let Some(map) = value.as_mapping() {
        validate_fields(map, SERVER_FIELDS, "server configuration", &mut errors);

        if let Some(docs) = map.get("docs").and_then(|docs| docs.as_mapping()) {
            validate_fields(docs, DOCS_FIELDS, "docs configuration", &mut errors);
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(
            errors.iter().map(ToString::to_string).collect(),
        )),
    }
}

fn validate_fields(
    map: &serde_yaml::Mapping,
    valid_fields: &[&str],
    context: &str,
    errors: &mut Vec<ValidationError>,
) {
    let valid_set: HashSet<&str> = valid_fields.iter().copied().collect();

    for key in map.keys() {
        if let Some(key_str) = key.as_str() {
            if !valid_set.contains(key_str) {
                errors.push(ValidationError::UnknownField {
                    field: key_str.to_string(),
                    context: context.to_string(),
                    valid_fields: valid_fields.join(", "),
                });
            }
        }
    }
}
