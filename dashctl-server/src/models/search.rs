//! Search query validation and LIKE pattern building

use super::ValidationError;

/// Maximum length for a search string
const MAX_QUERY_LEN: usize = 256;

/// Validated table search string.
///
/// Matched as a case-insensitive literal substring. The pattern is always
/// sent as a bound parameter, never spliced into SQL text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Create a search query. Empty matches everything; NUL is rejected.
    ///
    /// # Example
    /// ```
    /// use dashctl_server::models::SearchQuery;
    ///
    /// let q = SearchQuery::new("50%_off").unwrap();
    /// assert_eq!(q.like_pattern(), r"%50\%\_off%");
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_QUERY_LEN {
            return Err(ValidationError::TooLong {
                field: "query",
                max: MAX_QUERY_LEN,
            });
        }
        // PostgreSQL text cannot hold NUL
        if s.contains('\0') {
            return Err(ValidationError::InvalidFormat {
                field: "query",
                reason: "must not contain NUL characters",
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the raw query string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the `ILIKE` pattern `%<escaped>%`.
    ///
    /// `\`, `%` and `_` are escaped with backslash (PostgreSQL's default
    /// LIKE escape character) so they match literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_query() {
        let q = SearchQuery::new("ali").unwrap();
        assert_eq!(q.like_pattern(), "%ali%");
    }

    #[test]
    fn empty_query_matches_all() {
        assert_eq!(SearchQuery::default().like_pattern(), "%%");
    }

    #[test]
    fn escapes_wildcards() {
        let q = SearchQuery::new(r"a%b_c\d").unwrap();
        assert_eq!(q.like_pattern(), r"%a\%b\_c\\d%");
    }

    #[test]
    fn quotes_pass_through_untouched() {
        // bound as a parameter, so quotes need no escaping
        let q = SearchQuery::new("'; DROP TABLE invoices; --").unwrap();
        assert_eq!(q.like_pattern(), "%'; DROP TABLE invoices; --%");
    }

    #[test]
    fn max_length() {
        assert!(SearchQuery::new(&"a".repeat(256)).is_ok());

        let err = SearchQuery::new(&"a".repeat(257)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 256, .. }));
    }

    #[test]
    fn rejects_nul() {
        let err = SearchQuery::new("a\0b").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { field: "query", .. }
        ));
    }
}
