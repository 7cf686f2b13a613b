//! Invoice endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{InvoiceForm, InvoiceRepo, InvoiceTableRow};
use crate::http::error::ApiError;
use crate::http::extractors::{TableSearch, ValidUuid};
use crate::http::server::AppState;

/// Page count response
#[derive(Serialize)]
pub struct PagesResponse {
    pub total_pages: u32,
}

/// GET /api/invoices?query=&page= - one page of matching invoices
async fn list_invoices(
    State(state): State<Arc<AppState>>,
    search: TableSearch,
) -> Result<Json<Vec<InvoiceTableRow>>, ApiError> {
    let rows = InvoiceRepo::new(&state.pool)
        .filtered(&search.query, search.page)
        .await?;
    Ok(Json(rows))
}

/// GET /api/invoices/pages?query= - page count for a search
async fn invoice_pages(
    State(state): State<Arc<AppState>>,
    search: TableSearch,
) -> Result<Json<PagesResponse>, ApiError> {
    let total_pages = InvoiceRepo::new(&state.pool).pages(&search.query).await?;
    Ok(Json(PagesResponse { total_pages }))
}

/// GET /api/invoices/{id} - single invoice for editing
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<InvoiceForm>, ApiError> {
    InvoiceRepo::new(&state.pool)
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            resource: "invoice",
            id: id.to_string(),
        })
}

/// Invoice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices))
        .route("/invoices/pages", get(invoice_pages))
        .route("/invoices/{id}", get(get_invoice))
}
