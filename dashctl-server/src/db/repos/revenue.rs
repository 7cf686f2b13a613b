//! Revenue repository

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DataAccessError;

/// Monthly revenue row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

/// Revenue repository
pub struct RevenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RevenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All revenue rows, in table order.
    pub async fn list(&self) -> Result<Vec<Revenue>, DataAccessError> {
        tracing::debug!("Fetching revenue data");

        sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
            .fetch_all(self.pool)
            .await
            .map_err(DataAccessError::logged("revenue data"))
    }
}
