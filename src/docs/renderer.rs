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

//! Selection of the renderer backing the canonical `/docs` path.
//!
//! The choice is made once at startup and never changes afterwards.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::DocsSettings;

/// Renderer mounted at the canonical documentation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererChoice {
    /// Scalar API reference, configured from the docs settings.
    Scalar(ScalarOptions),
    /// Swagger UI, the renderer that is always compiled in.
    Swagger,
}

impl RendererChoice {
    /// Check whether the optional renderer is compiled in and resolve the choice.
    pub fn detect(settings: &DocsSettings) -> Self {
        let available = scalar_available();
        if let Some(notice) = fallback_notice(available) {
            warn!("{notice}");
        }
        Self::resolve(available, settings)
    }

    /// Resolve the choice from an explicit availability flag.
    pub fn resolve(scalar_available: bool, settings: &DocsSettings) -> Self {
        if scalar_available {
            RendererChoice::Scalar(ScalarOptions::from(settings))
        } else {
            RendererChoice::Swagger
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RendererChoice::Scalar(_) => "Scalar",
            RendererChoice::Swagger => "Swagger UI",
        }
    }
}

/// Warning logged at startup when `/docs` is downgraded to Swagger UI.
fn fallback_notice(scalar_available: bool) -> Option<&'static str> {
    (!scalar_available)
        .then_some("Scalar renderer is not compiled in; /docs falls back to Swagger UI")
}

/// Whether the Scalar renderer was compiled in (cargo feature `scalar`).
pub fn scalar_available() -> bool {
    cfg!(feature = "scalar")
}

/// Page options for the Scalar renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarOptions {
    pub title: String,
    pub theme: ScalarTheme,
    pub hide_client_button: bool,
    pub hide_download_button: bool,
}

impl From<&DocsSettings> for ScalarOptions {
    fn from(settings: &DocsSettings) -> Self {
        Self {
            title: settings.scalar_title.clone(),
            theme: settings.scalar_theme,
            hide_client_button: settings.hide_client_button,
            hide_download_button: settings.hide_download_button,
        }
    }
}

/// Documented Scalar theme identifiers.
///
/// `NoTheme` leaves the theme out of the renderer configuration so Scalar
/// applies its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarTheme {
    Default,
    Alternate,
    Moon,
    #[default]
    Purple,
    Solarized,
    BluePlanet,
    DeepSpace,
    Saturn,
    Kepler,
    Mars,
    #[serde(rename = "none")]
    NoTheme,
}

impl ScalarTheme {
    /// The value Scalar expects for its `theme` setting.
    pub fn value(self) -> Option<&'static str> {
        match self {
            ScalarTheme::Default => Some("default"),
            ScalarTheme::Alternate => Some("alternate"),
            ScalarTheme::Moon => Some("moon"),
            ScalarTheme::Purple => Some("purple"),
            ScalarTheme::Solarized => Some("solarized"),
            ScalarTheme::BluePlanet => Some("bluePlanet"),
            ScalarTheme::DeepSpace => Some("deepSpace"),
            ScalarTheme::Saturn => Some("saturn"),
            ScalarTheme::Kepler => Some("kepler"),
            ScalarTheme::Mars => Some("mars"),
            ScalarTheme::NoTheme => None,
        }
    }
}
