//! Shared helpers for database integration tests.
//!
//! Each test gets its own schema on the `DATABASE_URL` server, selected via
//! `search_path`, and drops it when done.

#![allow(dead_code)]

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let admin = PgPool::connect(&url).await.expect("admin connect failed");

        let schema = format!("dashctl_test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create schema failed");

        let options = PgConnectOptions::from_str(&url)
            .expect("invalid DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("test pool connect failed");

        Self {
            pool,
            admin,
            schema,
        }
    }

    /// Row count for `table`, or 0 if the table doesn't exist.
    pub async fn count(&self, table: &str) -> i64 {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = $1 AND table_name = $2)",
        )
        .bind(&self.schema)
        .bind(table)
        .fetch_one(&self.admin)
        .await
        .expect("table lookup failed");

        if !exists {
            return 0;
        }

        sqlx::query(&format!("SELECT COUNT(*) AS n FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("count failed")
            .get("n")
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop schema failed");
    }
}
