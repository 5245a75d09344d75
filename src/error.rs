//! Error types for appext

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appext operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for appext
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Settings Errors
    // -------------------------------------------------------------------------
    /// The requested scalar kind is not one the settings store supports.
    ///
    /// This is a programming error and is not meant to be handled at runtime.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    /// NaN and infinities have no portable encoding in the store formats
    #[error("Cannot store non-finite float {value} for {key}")]
    NonFiniteFloat { key: String, value: f32 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this error reports a scalar kind problem (unsupported or mismatched)
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedType(_) | Error::TypeMismatch { .. }
        )
    }

    /// Check if this is a filesystem error
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. } | Error::FileWrite { .. } | Error::DirectoryCreate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_message_names_type() {
        let err = Error::UnsupportedType("f64".into());
        assert_eq!(err.to_string(), "Unsupported type: f64");
        assert!(err.is_type_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_io_error_classification() {
        let err = Error::FileRead {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_io_error());
        assert!(!err.is_type_error());
        assert!(err.to_string().contains("/missing.json"));
    }
}
