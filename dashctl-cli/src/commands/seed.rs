//! Seed command
//!
//! Seeds over a single dedicated connection rather than a pool, and closes
//! it whether seeding succeeded or not.

use anyhow::{Context, Result};
use clap::Parser;
use dashctl_core::{DashboardConfig, SeedData};
use dashctl_server::db::connect_options;
use dashctl_server::seed;
use sqlx::{Connection, PgConnection};

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create the dashboard tables and insert the seed dataset
pub async fn run_seed(args: SeedArgs, mut config: DashboardConfig) -> Result<()> {
    if let Some(url) = args.database_url {
        config.database.url = Some(url);
    }

    let options = connect_options(&config.database).context("Invalid database settings")?;
    let mut conn = PgConnection::connect_with(&options)
        .await
        .context("Failed to connect to database")?;

    let outcome = seed(&mut conn, &SeedData::placeholder()).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close seed connection cleanly");
    }

    let report = outcome.context("Seeding failed")?;
    tracing::info!(
        users = report.users,
        customers = report.customers,
        invoices = report.invoices,
        revenue = report.revenue,
        "Seed complete"
    );
    println!("{}", report.message());

    Ok(())
}
