//! Customer repository
//!
//! filtered() uses a LEFT JOIN so customers without invoices still appear,
//! with zero totals.

use dashctl_core::format_currency;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DataAccessError;
use crate::models::SearchQuery;

/// Customer option for select inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// Customer with invoice aggregates.
///
/// Totals are display strings, formatted the same way as every other
/// amount the query layer returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

#[derive(FromRow)]
struct CustomerTableRaw {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    total_invoices: i64,
    total_pending: Option<i64>,
    total_paid: Option<i64>,
}

impl From<CustomerTableRaw> for CustomerTableRow {
    fn from(raw: CustomerTableRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            image_url: raw.image_url,
            total_invoices: raw.total_invoices,
            total_pending: format_currency(raw.total_pending.unwrap_or(0)),
            total_paid: format_currency(raw.total_paid.unwrap_or(0)),
        }
    }
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers by name, for pickers.
    pub async fn list(&self) -> Result<Vec<CustomerField>, DataAccessError> {
        sqlx::query_as::<_, CustomerField>(
            r#"
            SELECT id, name
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DataAccessError::logged("all customers"))
    }

    /// Customers whose name or email contains `query`, with invoice totals.
    pub async fn filtered(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<CustomerTableRow>, DataAccessError> {
        let rows = sqlx::query_as::<_, CustomerTableRaw>(
            r#"
            SELECT
                customers.id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END) AS total_pending,
                SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END) AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(query.like_pattern())
        .fetch_all(self.pool)
        .await
        .map_err(DataAccessError::logged("customer table"))?;

        Ok(rows.into_iter().map(CustomerTableRow::from).collect())
    }
}
