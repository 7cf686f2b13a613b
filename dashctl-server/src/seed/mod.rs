//! Database seeding
//!
//! Brings the store to the canonical seed state in one transaction:
//! users → customers → invoices → revenue. Each table is created if absent,
//! then filled with `INSERT ... ON CONFLICT DO NOTHING`, so a second run
//! inserts nothing and a run after a partial failure fills only the gaps.
//!
//! Sequential re-runs are safe. Concurrent runs against the same database
//! are not guarded here; trigger seeding from one operator at a time.

pub mod password;
mod schema;

use dashctl_core::{
    CustomerRecord, InvoiceRecord, RevenueRecord, SeedData, UserRecord, ValidationError,
};
use serde::Serialize;
use sqlx::{Connection, PgConnection};

/// Confirmation message returned on success
pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

/// Seeding failure. Any variant means the transaction was rolled back.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed dataset: {0}")]
    Dataset(#[from] ValidationError),

    #[error("failed to acquire database connection: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("failed to create table {table}: {source}")]
    CreateTable {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to hash password for {email}: {source}")]
    Hash {
        email: String,
        #[source]
        source: PasswordHashError,
    },

    #[error("failed to seed {table}: {source}")]
    Insert {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("transaction error: {0}")]
    Transaction(#[source] sqlx::Error),
}

/// Why a seed user's password could not be hashed
#[derive(Debug, thiserror::Error)]
pub enum PasswordHashError {
    #[error("hashing task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("argon2: {0}")]
    Argon2(#[from] password_hash::Error),
}

/// Rows inserted per table by one seeding run.
///
/// Rows skipped because their key already existed are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

impl SeedReport {
    /// Confirmation message for the caller
    pub fn message(&self) -> &'static str {
        SEED_SUCCESS_MESSAGE
    }

    /// Total rows inserted across all tables
    pub fn total(&self) -> u64 {
        self.users + self.customers + self.invoices + self.revenue
    }
}

/// Seed the four dashboard tables from `data`.
///
/// All-or-nothing: on any error the transaction is rolled back before the
/// error is returned. The caller owns `conn` and releases it.
pub async fn seed(conn: &mut PgConnection, data: &SeedData) -> Result<SeedReport, SeedError> {
    data.validate()?;

    let mut tx = conn.begin().await.map_err(SeedError::Transaction)?;

    match seed_tables(&mut tx, data).await {
        Ok(report) => {
            tx.commit().await.map_err(SeedError::Transaction)?;
            tracing::info!(
                users = report.users,
                customers = report.customers,
                invoices = report.invoices,
                revenue = report.revenue,
                "Database seeded"
            );
            Ok(report)
        }
        Err(err) => {
            tracing::error!(error = %err, "Seeding failed, rolling back");
            if let Err(rollback) = tx.rollback().await {
                tracing::error!(error = %rollback, "Rollback failed");
            }
            Err(err)
        }
    }
}

async fn seed_tables(conn: &mut PgConnection, data: &SeedData) -> Result<SeedReport, SeedError> {
    Ok(SeedReport {
        users: seed_users(conn, &data.users).await?,
        customers: seed_customers(conn, &data.customers).await?,
        invoices: seed_invoices(conn, &data.invoices).await?,
        revenue: seed_revenue(conn, &data.revenue).await?,
    })
}

async fn seed_users(conn: &mut PgConnection, users: &[UserRecord]) -> Result<u64, SeedError> {
    schema::create_table(conn, "users", schema::CREATE_USERS).await?;

    let mut inserted = 0;
    for user in users {
        let hashed = hash_off_thread(user).await?;
        inserted += sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(hashed)
        .execute(&mut *conn)
        .await
        .map_err(|source| SeedError::Insert { table: "users", source })?
        .rows_affected();
    }
    Ok(inserted)
}

/// argon2 is deliberately slow; keep it off the async workers.
async fn hash_off_thread(user: &UserRecord) -> Result<String, SeedError> {
    let plain = user.password.clone();
    let hashed = tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(PasswordHashError::from)
        .and_then(|r| r.map_err(PasswordHashError::from));

    hashed.map_err(|source| SeedError::Hash {
        email: user.email.clone(),
        source,
    })
}

async fn seed_customers(
    conn: &mut PgConnection,
    customers: &[CustomerRecord],
) -> Result<u64, SeedError> {
    schema::create_table(conn, "customers", schema::CREATE_CUSTOMERS).await?;

    let mut inserted = 0;
    for customer in customers {
        inserted += sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&mut *conn)
        .await
        .map_err(|source| SeedError::Insert { table: "customers", source })?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_invoices(
    conn: &mut PgConnection,
    invoices: &[InvoiceRecord],
) -> Result<u64, SeedError> {
    schema::create_table(conn, "invoices", schema::CREATE_INVOICES).await?;

    let mut inserted = 0;
    for invoice in invoices {
        inserted += sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(invoice.id)
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&mut *conn)
        .await
        .map_err(|source| SeedError::Insert { table: "invoices", source })?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_revenue(
    conn: &mut PgConnection,
    revenue: &[RevenueRecord],
) -> Result<u64, SeedError> {
    schema::create_table(conn, "revenue", schema::CREATE_REVENUE).await?;

    let mut inserted = 0;
    for row in revenue {
        inserted += sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(&row.month)
        .bind(row.revenue)
        .execute(&mut *conn)
        .await
        .map_err(|source| SeedError::Insert { table: "revenue", source })?
        .rows_affected();
    }
    Ok(inserted)
}
