//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use uuid::Uuid;

use super::error::ApiError;
use crate::models::{Pagination, SearchQuery, ValidationError};

/// Extract and validate a UUID from path
pub struct ValidUuid(pub Uuid);

impl<S> FromRequestParts<S> for ValidUuid
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let uuid = Uuid::parse_str(&id).map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "invalid UUID format",
            })
        })?;

        Ok(Self(uuid))
    }
}

/// Raw `?query=&page=` parameters
#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
    page: Option<u32>,
}

/// Extract a validated search string and page from the query string.
///
/// Missing `query` means "match everything"; missing `page` means page 1.
pub struct TableSearch {
    pub query: SearchQuery,
    pub page: Pagination,
}

impl<S> FromRequestParts<S> for TableSearch
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<SearchParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "page",
                    reason: "must be a positive integer",
                })
            })?;

        Ok(Self {
            query: SearchQuery::new(&params.query)?,
            page: Pagination::new(params.page.unwrap_or(1)),
        })
    }
}
