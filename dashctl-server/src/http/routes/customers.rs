//! Customer endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{CustomerField, CustomerRepo, CustomerTableRow};
use crate::http::error::ApiError;
use crate::http::extractors::TableSearch;
use crate::http::server::AppState;

/// GET /api/customers - all customers for pickers
async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerField>>, ApiError> {
    Ok(Json(CustomerRepo::new(&state.pool).list().await?))
}

/// GET /api/customers/filtered?query= - customer table with totals
async fn filtered_customers(
    State(state): State<Arc<AppState>>,
    search: TableSearch,
) -> Result<Json<Vec<CustomerTableRow>>, ApiError> {
    let rows = CustomerRepo::new(&state.pool).filtered(&search.query).await?;
    Ok(Json(rows))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/filtered", get(filtered_customers))
}
