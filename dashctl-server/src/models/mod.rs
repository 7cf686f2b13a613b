//! Request-side models with validation at construction
//!
//! User input (search strings, page numbers) is validated when creating
//! these types. Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod search;

pub use dashctl_core::ValidationError;
pub use pagination::{total_pages, Pagination, ITEMS_PER_PAGE};
pub use search::SearchQuery;
