//! API client for the frontend

use gloo_net::http::Request;
use subspace_core::SiteConfig;

/// Fetch the site configuration served at `/api/site`
pub async fn fetch_site_config() -> Result<SiteConfig, String> {
    let response = Request::get("/api/site")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let config = response
        .json::<SiteConfig>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    config.validate().map_err(|e| e.to_string())?;

    Ok(config)
}
