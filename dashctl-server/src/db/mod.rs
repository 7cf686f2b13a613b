//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - The pool is an owned handle passed in by the caller, never a global
//! - Every query binds its inputs as parameters
//! - Repositories are read-only; only the seeder writes

pub mod pool;
pub mod repos;

pub use pool::{connect_options, create_pool, create_pool_with_options};
pub use repos::*;
