//! Note search constants and helpers.
//!
//! Lives in `core` so the query-parameter validation in `api` and the
//! repository query in `db` agree on the same bounds.

// ---------------------------------------------------------------------------
// Query bounds
// ---------------------------------------------------------------------------

/// Maximum length of a search query in characters.
pub const MAX_SEARCH_QUERY_LENGTH: u64 = 255;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Resolve a user-provided limit: `default` when absent, negative floored to 0.
///
/// There is no upper bound, and `0` yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).max(0)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Pattern building
// ---------------------------------------------------------------------------

/// Build a `LIKE`/`ILIKE` pattern that matches `query` as a literal substring.
///
/// `%`, `_` and the escape character `\` are escaped so user input cannot
/// act as a wildcard.
///
/// # Examples
///
/// ```
/// use qdo_core::search::substring_pattern;
/// assert_eq!(substring_pattern("milk"), "%milk%");
/// assert_eq!(substring_pattern("50%"), "%50\\%%");
/// ```
pub fn substring_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
