//! Seeding trigger
//!
//! `GET /seed` runs the seeder over one pooled connection. The connection
//! goes back to the pool when the handler returns, on success or failure.
//! Meant for an operator, not for concurrent public traffic.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dashctl_core::SeedData;
use serde::Serialize;

use crate::http::server::AppState;
use crate::seed::{seed, SeedError};

#[derive(Serialize)]
struct SeedSuccess {
    message: &'static str,
}

#[derive(Serialize)]
struct SeedFailure {
    error: String,
}

/// GET /seed
async fn run_seed(State(state): State<Arc<AppState>>) -> Response {
    let outcome = async {
        let mut conn = state.pool.acquire().await.map_err(SeedError::Connection)?;
        seed(&mut conn, &SeedData::placeholder()).await
    }
    .await;

    match outcome {
        Ok(report) => (
            StatusCode::OK,
            Json(SeedSuccess {
                message: report.message(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Seed request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SeedFailure {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Seed routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/seed", get(run_seed))
}
