//! HTTP server command
//!
//! Runs the dashboard API: seeding trigger plus the read-only query routes.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use dashctl_core::DashboardConfig;
use dashctl_server::db::create_pool;
use dashctl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: config, DASHCTL_BIND, or 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

impl ServeArgs {
    /// Flags win over config file and environment.
    fn apply(self, config: &mut DashboardConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if self.cors_permissive {
            config.server.cors_permissive = true;
        }
        if let Some(url) = self.database_url {
            config.database.url = Some(url);
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: DashboardConfig) -> Result<()> {
    args.apply(&mut config);

    tracing::info!("Starting dashctl server on {}", config.server.bind);

    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, ServerConfig::from(&config.server))
        .await
        .context("Server error")?;

    Ok(())
}
