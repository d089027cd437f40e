//! Site configuration context
//!
//! Starts from the built-in defaults and swaps in the server's config once
//! `/api/site` answers. A failed fetch keeps the defaults.

use leptos::prelude::*;
use leptos::task::spawn_local;
use subspace_core::SiteConfig;

use crate::api::fetch_site_config;

/// Provide the config signal and start fetching the served config
pub fn provide_site_config() -> RwSignal<SiteConfig> {
    let site = RwSignal::new(SiteConfig::default());
    provide_context(site);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_site_config().await {
                Ok(config) => site.set(config),
                Err(e) => leptos::logging::warn!("Using default site config: {}", e),
            }
        });
    });

    site
}

/// Hook to access the site config, falling back to defaults outside a provider
pub fn use_site_config() -> RwSignal<SiteConfig> {
    use_context::<RwSignal<SiteConfig>>().unwrap_or_else(|| RwSignal::new(SiteConfig::default()))
}
