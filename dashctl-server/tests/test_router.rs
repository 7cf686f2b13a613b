//! Router tests that don't need a running database.
//!
//! The pool points at a closed port, so every query fails fast and the
//! handlers' error paths are exercised end to end.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use dashctl_server::build_router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn unreachable_router() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy("postgres://dashctl@127.0.0.1:1/dashctl")
        .expect("lazy pool");
    build_router(pool, false)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = unreachable_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn query_failure_returns_generic_message() {
    let (status, body) = get("/api/revenue").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "Failed to fetch revenue data.");
}

#[tokio::test]
async fn card_failure_names_card_data() {
    let (status, body) = get("/api/cards").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch card data.");
}

#[tokio::test]
async fn malformed_invoice_id_is_rejected_before_querying() {
    let (status, body) = get("/api/invoices/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn non_numeric_page_is_rejected() {
    let (status, _) = get("/api/invoices?query=&page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_query_is_rejected() {
    let uri = format!("/api/customers/filtered?query={}", "a".repeat(300));
    let (status, _) = get(&uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn nul_in_query_is_rejected_before_querying() {
    let (status, body) = get("/api/invoices?query=a%00b").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn seed_failure_reports_error() {
    let (status, body) = get("/seed").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
