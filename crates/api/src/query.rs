//! Shared query parameter types for API handlers.

use qdo_core::search::MAX_SEARCH_QUERY_LENGTH;
use serde::Deserialize;
use validator::Validate;

/// Query parameters for `GET /note/search/` (`?query=&skip=&limit=`).
///
/// Negative `skip` / `limit` are floored to 0 in the handler via
/// `clamp_offset` / `clamp_limit`; only `query` is rejected when out of bounds.
#[derive(Debug, Deserialize, Validate)]
pub struct NoteSearchParams {
    #[validate(length(
        min = 1,
        max = MAX_SEARCH_QUERY_LENGTH,
        message = "Query must be 1-255 characters"
    ))]
    pub query: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> NoteSearchParams {
        NoteSearchParams {
            query: query.to_string(),
            skip: None,
            limit: None,
        }
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(params("").validate().is_err());
    }

    #[test]
    fn query_at_max_length_is_accepted() {
        assert!(params(&"a".repeat(MAX_SEARCH_QUERY_LENGTH as usize)).validate().is_ok());
    }

    #[test]
    fn query_over_max_length_is_rejected() {
        assert!(params(&"a".repeat(MAX_SEARCH_QUERY_LENGTH as usize + 1)).validate().is_err());
    }
}
