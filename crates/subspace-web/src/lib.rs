//! subspace-web - Landing page frontend (Leptos) and its server (Axum)

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod scroll_hook;
pub mod site;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use auth::{use_auth, AuthContext, AuthProvider};
pub use components::Navbar;

#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::Arc;
    use subspace_core::SiteConfig;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::router::create_router;

    /// Run the web server until Ctrl-C
    pub async fn run(config: SiteConfig, port: u16, dist: PathBuf) -> Result<()> {
        let brand = config.brand.clone();
        let router = create_router(Arc::new(config), &dist);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(%brand, "Web server listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web server error")?;

        Ok(())
    }

    async fn shutdown_signal() {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down web server");
        }
    }
}

#[cfg(feature = "ssr")]
pub use server::run;
