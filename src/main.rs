//! Header bridge gateway.
//!
//! Serves the echo gateway: request headers are mapped into message headers,
//! echoed back as JSON, and configured reply headers are mapped out.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use header_bridge::config::{load_config, BridgeConfig};
use header_bridge::http::GatewayServer;
use header_bridge::observability::logging;

#[derive(Parser)]
#[command(name = "header-bridge")]
#[command(about = "HTTP gateway mapping headers to and from message headers", long_about = None)]
struct Cli {
    /// Path to the TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("header-bridge v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        preset = ?config.mapper.preset,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    GatewayServer::new(config).run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
