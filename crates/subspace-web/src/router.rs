//! Web router using Axum
//!
//! Serves the small JSON API and the built frontend. Unknown paths fall back
//! to `index.html` so client-side routes (`/auth`, `/profile`) survive a
//! reload.

use axum::{extract::State, response::Html, routing::get, Json, Router};
use std::path::Path;
use std::sync::Arc;
use subspace_core::SiteConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

/// Create the web router. `dist` is the Trunk output directory.
pub fn create_router(config: Arc<SiteConfig>, dist: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/site", get(site_handler));

    let index = dist.join("index.html");
    let router = if index.exists() {
        info!(dist = %dist.display(), "Serving frontend");
        api.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
    } else {
        warn!(dist = %dist.display(), "Frontend not built, serving placeholder");
        api.fallback(placeholder_handler)
    };

    router.layer(cors).with_state(config)
}

async fn health_handler(State(config): State<Arc<SiteConfig>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "brand": config.brand,
        "nav_links": config.nav_labels.len(),
    }))
}

async fn site_handler(State(config): State<Arc<SiteConfig>>) -> Json<SiteConfig> {
    Json(config.as_ref().clone())
}

async fn placeholder_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SubSpace - Build Required</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #0b0b12;
            color: #e5e5ef;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .setup-message { max-width: 560px; padding: 2rem; }
        code { background: #1c1c28; padding: 0.2rem 0.4rem; border-radius: 4px; }
        a { color: #e0245e; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>SubSpace - frontend not built</h1>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/subspace-web && trunk build --release</code></li>
            <li>Restart: <code>subspace serve</code></li>
        </ol>
        <p>API: <a href="/api/health">/api/health</a>, <a href="/api/site">/api/site</a></p>
    </div>
</body>
</html>"#,
    )
}
