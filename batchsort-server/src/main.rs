//! # batchsort server
//!
//! Binary entry point: parse the CLI, load layered configuration, install
//! tracing and serve the sort endpoints over plain HTTP.

use std::path::PathBuf;

use anyhow::Context;
use batchsort_config::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use batchsort_server::{create_app, infra::telemetry::init_tracing};
use clap::Parser;
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "batchsort-server")]
#[command(
    about = "Sort batches of integer sequences sequentially or with one task per sequence"
)]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "BATCHSORT_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
    })
    .load()
    .context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }

    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let app = create_app(&config);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        address = %addr,
        max_body_bytes = config.limits.max_body_bytes,
        "batchsort server listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
