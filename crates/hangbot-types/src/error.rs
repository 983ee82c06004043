use thiserror::Error;

/// Errors from session store operations (used by trait definitions in hangbot-core).
///
/// Store failure is the one class treated as fatal at the adapter boundary.
/// A missing record is not an error: `get` returns `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the word provider.
///
/// Word-fetch failures and translation failures collapse into one
/// externally-visible outcome: from the caller's perspective both mean
/// "no game could be started". The payload carries the cause for logs.
#[derive(Debug, Error)]
pub enum WordError {
    #[error("word source unavailable: {0}")]
    SourceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_word_error_display() {
        let err = WordError::SourceUnavailable("HTTP 503".to_string());
        assert_eq!(err.to_string(), "word source unavailable: HTTP 503");
    }
}
