use anyhow::{Context, Result};
use std::env;

/// Relay configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream JSON-RPC endpoint URL
    pub upstream_rpc_url: String,
    /// HTTP listen port
    pub listen_port: u16,
    /// Permissive CORS on the inbound surface
    pub cors_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Call dotenvy::dotenv() before calling this.
    pub fn from_env() -> Result<Self> {
        let upstream_rpc_url = env::var("UPSTREAM_RPC_URL")
            .unwrap_or_else(|_| "https://polygon-rpc.com/".to_string());

        let listen_port: u16 = env::var("RELAY_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("RELAY_PORT must be a valid u16")?;

        let cors_enabled: bool = env::var("RELAY_CORS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("RELAY_CORS must be true or false")?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            upstream_rpc_url,
            listen_port,
            cors_enabled,
            log_level,
        })
    }
}
