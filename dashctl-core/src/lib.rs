//! dashctl-core: shared domain types for the invoicing dashboard
//!
//! Everything here is storage-agnostic: the invoice status enum, the
//! static seed dataset, currency display formatting and the configuration
//! file model. The PostgreSQL layer lives in `dashctl-server`.

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod config;
pub mod currency;
pub mod error;
pub mod model;
pub mod seed_data;
pub mod validation;

pub use config::{DashboardConfig, DatabaseConfig, ServerSection};
pub use currency::{cents_to_units, format_currency};
pub use error::{CoreError, Result};
pub use model::InvoiceStatus;
pub use seed_data::{CustomerRecord, InvoiceRecord, RevenueRecord, SeedData, UserRecord};
pub use validation::ValidationError;
