//! Block Relay
//!
//! Entry point for the relay that forwards validated Ethereum JSON-RPC
//! envelopes to a single upstream node. Loads configuration from
//! environment/.env file and starts the HTTP server on the configured port.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use block_relay::config::Config;
use block_relay::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    info!("=== Block Relay ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Relaying Ethereum JSON-RPC to a single upstream node");
    info!("");

    // Load configuration
    let config = Config::from_env()?;

    info!("Configuration:");
    info!("  Listen port: {}", config.listen_port);
    info!("  Upstream RPC: {}", config.upstream_rpc_url);
    info!("  CORS: {}", config.cors_enabled);
    info!("");

    // Start the HTTP server
    start_server(config).await?;

    Ok(())
}
