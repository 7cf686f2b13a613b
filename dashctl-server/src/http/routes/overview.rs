//! Overview endpoints: revenue chart, latest invoices, summary cards

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{CardData, CardRepo, InvoiceRepo, LatestInvoice, Revenue, RevenueRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/revenue
async fn revenue(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Revenue>>, ApiError> {
    Ok(Json(RevenueRepo::new(&state.pool).list().await?))
}

/// GET /api/invoices/latest
async fn latest_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LatestInvoice>>, ApiError> {
    Ok(Json(InvoiceRepo::new(&state.pool).latest().await?))
}

/// GET /api/cards
async fn cards(State(state): State<Arc<AppState>>) -> Result<Json<CardData>, ApiError> {
    Ok(Json(CardRepo::new(&state.pool).fetch().await?))
}

/// Overview routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/revenue", get(revenue))
        .route("/invoices/latest", get(latest_invoices))
        .route("/cards", get(cards))
}
