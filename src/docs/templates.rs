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

//! HTML page templates for the Swagger UI, Scalar and ReDoc renderers.
//!
//! `$spec` (and `$config` for ReDoc) are filled in by the renderer crates.
//! The Swagger UI page loads the document from its URL instead.

use serde::Serialize;

use super::renderer::ScalarOptions;

pub const SWAGGER_TITLE: &str = "Swagger UI - Docs";
pub const REDOC_TITLE: &str = "ReDoc - Docs";

const SWAGGER_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>@title@</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
    window.ui = SwaggerUIBundle({
        url: "@url@",
        dom_id: "#swagger-ui",
        deepLinking: true,
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
        layout: "BaseLayout"
    });
</script>
</body>
</html>
"##;

const SCALAR_TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
    <title>@title@</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
</head>
<body>
<script id="api-reference" type="application/json" data-configuration='@configuration@'>
    $spec
</script>
<script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
</body>
</html>
"#;

const REDOC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>@title@</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link href="https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700" rel="stylesheet" />
    <style>
      body {
        margin: 0;
        padding: 0;
      }
    </style>
  </head>
  <body>
    <div id="redoc-container"></div>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
    <script>
      Redoc.init($spec, $config, document.getElementById("redoc-container"));
    </script>
  </body>
</html>
"#;

/// Configuration object handed to Scalar through `data-configuration`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScalarConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<&'static str>,
    hide_client_button: bool,
    hide_download_button: bool,
}

impl From<&ScalarOptions> for ScalarConfiguration {
    fn from(options: &ScalarOptions) -> Self {
        Self {
            theme: options.theme.value(),
            hide_client_button: options.hide_client_button,
            hide_download_button: options.hide_download_button,
        }
    }
}

/// Scalar page for the given options.
pub fn scalar_html(options: &ScalarOptions) -> String {
    let configuration = serde_json::to_string(&ScalarConfiguration::from(options))
        .unwrap_or_else(|_| "{}".to_string());

    SCALAR_TEMPLATE
        .replace("@title@", &escape_html(&options.title))
        .replace("@configuration@", &escape_html(&configuration))
}

/// Swagger UI page reading the description document from `openapi_url`.
pub fn swagger_html(openapi_url: &str) -> String {
    SWAGGER_TEMPLATE
        .replace("@title@", SWAGGER_TITLE)
        .replace("@url@", &escape_html(openapi_url))
}

pub fn redoc_html() -> String {
    REDOC_TEMPLATE.replace("@title@", REDOC_TITLE)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::renderer::ScalarTheme;

    fn options(theme: ScalarTheme) -> ScalarOptions {
        ScalarOptions {
            title: "API Docs - Scalar".to_string(),
            theme,
            hide_client_button: false,
            hide_download_button: true,
        }
    }

    #[test]
    fn test_scalar_html_includes_theme() {
        let html = scalar_html(&options(ScalarTheme::Purple));
        assert!(html.contains("<title>API Docs - Scalar</title>"));
        assert!(html.contains("&quot;theme&quot;:&quot;purple&quot;"));
        assert!(html.contains("&quot;hideDownloadButton&quot;:true"));
        assert!(html.contains("$spec"));
    }

    #[test]
    fn test_scalar_html_omits_theme_when_unset() {
        let html = scalar_html(&options(ScalarTheme::NoTheme));
        assert!(!html.contains("theme"));
        assert!(html.contains("&quot;hideClientButton&quot;:false"));
    }

    #[test]
    fn test_scalar_title_is_escaped() {
        let mut opts = options(ScalarTheme::Moon);
        opts.title = "<Docs & 'Co'>".to_string();
        let html = scalar_html(&opts);
        assert!(html.contains("<title>&lt;Docs &amp; &#39;Co&#39;&gt;</title>"));
    }

    #[test]
    fn test_swagger_html_points_at_document() {
        let html = swagger_html("/openapi.json");
        assert!(html.contains("<title>Swagger UI - Docs</title>"));
        assert!(html.contains(r#"url: "/openapi.json""#));
        assert!(html.contains(r#"<div id="swagger-ui"></div>"#));
        assert!(!html.contains("@url@"));
    }

    #[test]
    fn test_redoc_html_keeps_placeholders() {
        let html = redoc_html();
        assert!(html.contains("<title>ReDoc - Docs</title>"));
        assert!(html.contains("$spec"));
        assert!(html.contains("$config"));
    }
}
