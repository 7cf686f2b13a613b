//! dashctl-server: PostgreSQL data layer and HTTP API
//!
//! - [`seed`]: idempotent, transactional seeding of the four dashboard tables
//! - [`db`]: connection pool and the read-only query repositories
//! - [`http`]: axum router exposing the seeding trigger and a JSON read API

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod db;
pub mod http;
pub mod models;
pub mod seed;

pub use db::{create_pool, DataAccessError};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use seed::{seed, SeedError, SeedReport};
