//! param-router demo service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http server ──▶ RouteTable::dispatch       │
//!                             │   (axum, request   │                          │
//!                             │    id, trace,      ▼                          │
//!                             │    timeout)     matcher ──▶ RequestContext    │
//!                             │                                 │             │
//!     Client Response         │                                 ▼             │
//!     ◀───────────────────────┼── response / 404 ◀──────── Handler::serve     │
//!                             └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use param_router::config::{load_config, RouterConfig};
use param_router::http::{bind_listener, HttpServer};
use param_router::lifecycle::{shutdown_signal, Shutdown};
use param_router::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "param-router")]
#[command(about = "HTTP router with named path parameters", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "param-router starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    error = %e,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // Registration completes before the listener is bound.
    let table = param_router::app::routes();
    let listener = bind_listener(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on(shutdown_signal()));

    HttpServer::new(config, table)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
