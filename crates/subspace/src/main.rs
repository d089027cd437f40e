//! subspace - SubSpace landing page server and navigation inspector

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subspace_core::SiteConfig;

#[derive(Parser)]
#[command(
    name = "subspace",
    version,
    about = "SubSpace landing page server",
    long_about = "Serves the SubSpace landing page (Leptos frontend + JSON API) and inspects\n\
                  the navigation it renders.\n\
                  \n\
                  Examples:\n\
                    subspace serve                   # API + frontend on port 3333\n\
                    subspace serve --port 8080       # Custom port\n\
                    subspace routes                  # List anchors and routes\n\
                    subspace routes --json           # Same, as JSON\n\
                    subspace check                   # Validate the site config\n\
                  \n\
                  Frontend workflow:\n\
                    cd crates/subspace-web && trunk build --release\n\
                    subspace serve\n\
                  \n\
                  Environment Variables:\n\
                    SUBSPACE_CONFIG                  # Path to site.toml\n\
                    SUBSPACE_NO_COLOR                # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to the site config (default: <config dir>/subspace/site.toml)
    #[arg(long, global = true, env = "SUBSPACE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SUBSPACE_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the API and the built frontend (default)
    Serve {
        /// Port for the web server
        #[arg(long, default_value = "3333")]
        port: u16,
        /// Trunk output directory
        #[arg(long, default_value = "crates/subspace-web/dist")]
        dist: PathBuf,
    },
    /// List the anchors and routes the navbar links to
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the site config and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let config = load_config(cli.config.as_deref())?;

    match cli.mode.unwrap_or(Mode::Serve {
        port: 3333,
        dist: PathBuf::from("crates/subspace-web/dist"),
    }) {
        Mode::Serve { port, dist } => {
            if !dist.join("index.html").exists() {
                println!("API only: http://localhost:{}/api/*", port);
                println!("  Run 'trunk build' in crates/subspace-web to compile the frontend");
            }
            subspace_web::run(config, port, dist).await?;
        }
        Mode::Routes { json } => {
            cli::print_routes(&config, json, cli.no_color)?;
        }
        Mode::Check => {
            for line in cli::check_summary(&config) {
                println!("{}", line);
            }
            println!("Config OK");
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<SiteConfig> {
    let config_dir = dirs::config_dir();
    SiteConfig::resolve(explicit, config_dir.as_deref())
        .map_err(|e| {
            if let Some(hint) = e.suggestion() {
                eprintln!("hint: {}", hint);
            }
            anyhow::Error::new(e)
        })
        .context("Failed to load site config")
}

fn init_logging(verbose: bool, no_color: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(!no_color)
                .compact(),
        )
        .init();
}
