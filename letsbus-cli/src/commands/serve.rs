//! HTTP server command
//!
//! Runs the directory and report service the pages talk to.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use letsbus_core::LetsbusConfig;
use letsbus_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: from config, 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &LetsbusConfig) -> Result<()> {
    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid [server].bind '{}'", config.server.bind))?,
    };
    let database_url = args
        .database_url
        .unwrap_or_else(|| config.server.database_url.clone());

    tracing::info!("Starting letsbus server on {}", bind_addr);

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    // Blocks until shutdown
    letsbus_server::serve(&database_url, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
