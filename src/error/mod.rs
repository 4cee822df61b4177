//! Error handling for the item store
//!
//! This module provides the error types for catalog and persistence
//! operations.

use std::fmt;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for catalog and persistence operations
///
/// Corrupt input is always distinguishable from a cleanly finished file:
/// the decoder reports `UnknownTag` or `Truncated` instead of pretending
/// the stream ended.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// File I/O errors
    Io(String),
    /// A record tag that names none of the known item kinds
    UnknownTag(String),
    /// The byte source ended partway through a field
    Truncated(String),
    /// A text field held bytes that are not valid UTF-8
    Text(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {msg}"),
            StoreError::UnknownTag(tag) => write!(f, "Unknown item tag: {tag}"),
            StoreError::Truncated(msg) => write!(f, "Truncated record: {msg}"),
            StoreError::Text(msg) => write!(f, "Invalid text field: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::UnknownTag("Furniture".to_string());
        assert_eq!(err.to_string(), "Unknown item tag: Furniture");

        let err = StoreError::Truncated("price: need 8 bytes".to_string());
        assert!(err.to_string().contains("Truncated record"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
