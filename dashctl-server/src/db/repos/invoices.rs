//! Invoice repository
//!
//! - latest: JOIN customers, newest five
//! - filtered/pages: one shared search predicate, bound once as `$1`
//! - get: exact id lookup, `None` when absent

use chrono::NaiveDate;
use dashctl_core::{cents_to_units, format_currency, InvoiceStatus};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{decode_error, DataAccessError};
use crate::models::{total_pages, Pagination, SearchQuery, ITEMS_PER_PAGE};

/// Search predicate shared by the table and page-count queries.
/// `$1` is the escaped ILIKE pattern.
const INVOICE_SEARCH: &str = r#"
    customers.name ILIKE $1 OR
    customers.email ILIKE $1 OR
    invoices.amount::text ILIKE $1 OR
    invoices.date::text ILIKE $1 OR
    invoices.status ILIKE $1
"#;

/// Number of invoices shown on the overview
const LATEST_LIMIT: i64 = 5;

/// Latest invoice summary with display-formatted amount
#[derive(Debug, Clone, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

#[derive(FromRow)]
struct LatestInvoiceRaw {
    id: Uuid,
    name: String,
    image_url: String,
    email: String,
    amount: i32,
}

impl From<LatestInvoiceRaw> for LatestInvoice {
    fn from(raw: LatestInvoiceRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            image_url: raw.image_url,
            email: raw.email,
            amount: format_currency(i64::from(raw.amount)),
        }
    }
}

/// Invoice joined with its customer, for the searchable table
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceTableRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    /// Amount in cents
    pub amount: i32,
    pub status: InvoiceStatus,
}

#[derive(FromRow)]
struct InvoiceTableRaw {
    id: Uuid,
    customer_id: Uuid,
    name: String,
    email: String,
    image_url: String,
    date: NaiveDate,
    amount: i32,
    status: String,
}

impl TryFrom<InvoiceTableRaw> for InvoiceTableRow {
    type Error = sqlx::Error;

    fn try_from(raw: InvoiceTableRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            customer_id: raw.customer_id,
            name: raw.name,
            email: raw.email,
            image_url: raw.image_url,
            date: raw.date,
            amount: raw.amount,
            status: raw.status.parse::<InvoiceStatus>().map_err(decode_error)?,
        })
    }
}

/// Invoice for the edit form; amount in display units (dollars)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: InvoiceStatus,
}

#[derive(FromRow)]
struct InvoiceFormRaw {
    id: Uuid,
    customer_id: Uuid,
    amount: i32,
    status: String,
}

impl TryFrom<InvoiceFormRaw> for InvoiceForm {
    type Error = sqlx::Error;

    fn try_from(raw: InvoiceFormRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            customer_id: raw.customer_id,
            amount: cents_to_units(i64::from(raw.amount)),
            status: raw.status.parse::<InvoiceStatus>().map_err(decode_error)?,
        })
    }
}

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Five most recent invoices with customer details.
    pub async fn latest(&self) -> Result<Vec<LatestInvoice>, DataAccessError> {
        let rows = sqlx::query_as::<_, LatestInvoiceRaw>(
            r#"
            SELECT invoices.id, invoices.amount, customers.name, customers.image_url, customers.email
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_LIMIT)
        .fetch_all(self.pool)
        .await
        .map_err(DataAccessError::logged("the latest invoices"))?;

        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }

    /// One page of invoices matching `query`, newest first.
    pub async fn filtered(
        &self,
        query: &SearchQuery,
        page: Pagination,
    ) -> Result<Vec<InvoiceTableRow>, DataAccessError> {
        let sql = format!(
            r#"
            SELECT
                invoices.id,
                invoices.customer_id,
                invoices.amount,
                invoices.date,
                invoices.status,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE {INVOICE_SEARCH}
            ORDER BY invoices.date DESC, invoices.id
            LIMIT $2 OFFSET $3
            "#
        );

        let on_error = DataAccessError::logged("invoices");
        let rows = sqlx::query_as::<_, InvoiceTableRaw>(&sql)
            .bind(query.like_pattern())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool)
            .await
            .and_then(|rows| {
                rows.into_iter()
                    .map(InvoiceTableRow::try_from)
                    .collect::<Result<Vec<_>, _>>()
            });

        rows.map_err(on_error)
    }

    /// Number of table pages for `query` at the fixed page size.
    pub async fn pages(&self, query: &SearchQuery) -> Result<u32, DataAccessError> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE {INVOICE_SEARCH}
            "#
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(query.like_pattern())
            .fetch_one(self.pool)
            .await
            .map_err(DataAccessError::logged("total number of invoices"))?;

        Ok(total_pages(count, ITEMS_PER_PAGE))
    }

    /// Invoice by id, or `None` if it doesn't exist.
    pub async fn get(&self, id: Uuid) -> Result<Option<InvoiceForm>, DataAccessError> {
        let on_error = DataAccessError::logged("invoice");
        let row = sqlx::query_as::<_, InvoiceFormRaw>(
            r#"
            SELECT invoices.id, invoices.customer_id, invoices.amount, invoices.status
            FROM invoices
            WHERE invoices.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .and_then(|row| row.map(InvoiceForm::try_from).transpose());

        row.map_err(on_error)
    }
}
