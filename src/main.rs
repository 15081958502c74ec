//! fetch-html-proxy binary.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                ┌──────────────────────────────────────────┐
//!     ───────────────────────┼─▶ http::server (request id, trace, CORS)  │
//!                            │          │                               │
//!                            │          ▼                               │
//!                            │   proxy::handler ── OPTIONS ─▶ 204       │
//!                            │          │                               │
//!                            │          ▼                               │
//!                            │   proxy::upstream ──── GET ──────────────┼──▶ Upstream
//!                            │          │                               │
//!     ◀──────────────────────┼── http::response (status, body, html)    │
//!                            └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use fetch_html_proxy::config::{load_config, validate_config, ConfigError, ProxyConfig};
use fetch_html_proxy::lifecycle::startup;
use fetch_html_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "fetch-html-proxy")]
#[command(about = "Fetches a URL on behalf of browsers and relays it with open CORS headers", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        "fetch-html-proxy starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
