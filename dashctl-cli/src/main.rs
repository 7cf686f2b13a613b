//! dashctl CLI - invoicing dashboard backend
//!
//! - `serve`: run the JSON API over a PostgreSQL pool
//! - `seed`: bring the database to the canonical seed state

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashctl_core::DashboardConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "dashctl",
    author,
    version,
    about = "Seeder and query API for the invoicing dashboard",
    long_about = "Seed a PostgreSQL database with the dashboard's customers, invoices, \
                  revenue and users, and serve the read-only query layer as JSON."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.dashctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the tables and insert the seed dataset
    Seed(commands::seed::SeedArgs),
}

/// Load `.env` from the working directory, then `~/.dashctl/.env`.
/// Variables already set are never overwritten.
fn load_dotenv() {
    dotenvy::dotenv().ok();
    if let Some(dir) = dashctl_core::config::config_dir() {
        let env_file = dir.join(".env");
        if env_file.exists() {
            dotenvy::from_path(&env_file).ok();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    load_dotenv();
    let config = DashboardConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await,
        Commands::Seed(args) => commands::run_seed(args, config).await,
    };

    tracing_setup::shutdown_otel();
    result
}
