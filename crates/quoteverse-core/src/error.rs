//! Error types for QuoteVerse

use thiserror::Error;

/// Main error type for QuoteVerse operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Upstream quote API request failed (connect, timeout, non-2xx)
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream response did not have the expected shape
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Error reading or writing the favorites file
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using QuoteError
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuoteError::MalformedResponse("not an array".to_string());
        assert_eq!(format!("{}", err), "Malformed upstream response: not an array");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QuoteError = io_err.into();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
