//! Route handlers organized by resource
//!
//! - health: liveness check
//! - seed: one-shot seeding trigger
//! - overview: revenue chart, latest invoices, summary cards
//! - invoices: searchable invoice table and single-invoice lookup
//! - customers: customer picker and searchable customer table

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

pub mod customers;
pub mod health;
pub mod invoices;
pub mod overview;
pub mod seed;

/// Read API, nested under `/api`
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(overview::router())
        .merge(invoices::router())
        .merge(customers::router())
}
