//! Overview card aggregates
//!
//! Three independent aggregate queries run concurrently on separate pooled
//! connections; any failure fails the whole card set.

use dashctl_core::format_currency;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DataAccessError;

/// Headline numbers for the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub number_of_customers: i64,
    pub number_of_invoices: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

#[derive(FromRow)]
struct StatusTotals {
    paid: Option<i64>,
    pending: Option<i64>,
}

/// Card data repository
pub struct CardRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CardRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Invoice count, customer count and paid/pending totals.
    pub async fn fetch(&self) -> Result<CardData, DataAccessError> {
        let invoice_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices").fetch_one(self.pool);
        let customer_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers").fetch_one(self.pool);
        let status_totals = sqlx::query_as::<_, StatusTotals>(
            r#"
            SELECT
                SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS paid,
                SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS pending
            FROM invoices
            "#,
        )
        .fetch_one(self.pool);

        let (number_of_invoices, number_of_customers, totals) =
            tokio::try_join!(invoice_count, customer_count, status_totals)
                .map_err(DataAccessError::logged("card data"))?;

        Ok(CardData {
            number_of_customers,
            number_of_invoices,
            total_paid_invoices: format_currency(totals.paid.unwrap_or(0)),
            total_pending_invoices: format_currency(totals.pending.unwrap_or(0)),
        })
    }
}
