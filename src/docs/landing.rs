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

//! Static landing page linking to every documentation view.

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>📚 API Documentation</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            background: #f4f6f8;
            color: #333;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .container {
            text-align: center;
            background: white;
            padding: 2rem;
            border-radius: 16px;
            box-shadow: 0 4px 20px rgba(0,0,0,0.1);
        }
        h1 {
            margin-bottom: 1rem;
            color: #4a148c;
        }
        a {
            display: block;
            margin: 0.5rem 0;
            padding: 0.8rem 1.2rem;
            border-radius: 12px;
            text-decoration: none;
            font-weight: bold;
            transition: 0.3s;
        }
        a.scalar { background: #7e57c2; color: white; }
        a.scalar:hover { background: #5e35b1; }
        a.swagger { background: #2e7d32; color: white; }
        a.swagger:hover { background: #1b5e20; }
        a.redoc { background: #1565c0; color: white; }
        a.redoc:hover { background: #0d47a1; }
    </style>
</head>
<body>
    <div class="container">
        <h1>📚 API Documentation</h1>
        <a href="/docs" class="scalar">✨ Scalar (Recommended)</a>
        <a href="/swagger" class="swagger">⚡ Swagger UI</a>
        <a href="/redoc" class="redoc">📘 ReDoc</a>
    </div>
</body>
</html>
"#;

/// Serve the landing page.
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
