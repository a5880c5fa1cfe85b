//! Demo server for the on-headers interceptor.
//!
//! Serves a couple of routes whose responses pass through response head
//! listeners: a response time stamp and a set of static headers.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use on_headers::config::{load_config, validate_config, ConfigError, ServerConfig};
use on_headers::lifecycle::{signals, Shutdown};
use on_headers::observability::init_logging;
use on_headers::HttpServer;

#[derive(Parser)]
#[command(name = "on-headers")]
#[command(about = "Demo server stamping headers right before they are sent", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        response_time_header = %config.headers.response_time_header,
        static_headers = config.headers.static_headers.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    tokio::spawn(signals::forward_ctrl_c(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, shutdown.wait()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
