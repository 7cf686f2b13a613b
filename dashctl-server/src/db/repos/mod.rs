//! Read-only repositories over the dashboard tables
//!
//! Each repository follows these patterns:
//! - Borrows the pool; no hidden global connection
//! - Search input is bound as a parameter (see [`SearchQuery`](crate::models::SearchQuery))
//! - Failures are logged here with full detail, then surfaced as a generic
//!   [`DataAccessError`]

pub mod cards;
pub mod customers;
pub mod invoices;
pub mod revenue;

pub use cards::{CardData, CardRepo};
pub use customers::{CustomerField, CustomerRepo, CustomerTableRow};
pub use invoices::{InvoiceForm, InvoiceRepo, InvoiceTableRow, LatestInvoice};
pub use revenue::{Revenue, RevenueRepo};

/// Query layer failure.
///
/// Displays only the generic "Failed to fetch ..." message. The driver
/// error is kept as the source for diagnostics.
#[derive(Debug, thiserror::Error)]
#[error("Failed to fetch {resource}.")]
pub struct DataAccessError {
    resource: &'static str,
    #[source]
    source: sqlx::Error,
}

impl DataAccessError {
    /// Build an error mapper that logs the driver error for `resource`.
    pub(crate) fn logged(resource: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| {
            tracing::error!(resource, error = %source, "Database error");
            Self { resource, source }
        }
    }

    /// What was being fetched, e.g. "card data"
    pub fn resource(&self) -> &'static str {
        self.resource
    }
}

/// Map a row-level decode problem into a driver error.
pub(crate) fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}
