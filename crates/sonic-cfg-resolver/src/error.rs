//! Error types for configuration lookups.
//!
//! A missing row or key is never an error: lookups return `None` for
//! "not configured". Errors are reserved for data that cannot be
//! interpreted, and for failures loading snapshots or resolver config.

use std::io;
use thiserror::Error;

/// Result type alias for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Row data violates a lookup precondition (malformed address, no
    /// address to pick from).
    #[error("Invalid input for {field}: {message}")]
    InvalidInput {
        /// The column or argument that was rejected.
        field: String,
        /// Error message.
        message: String,
    },

    /// Two rows share a name that must be unique.
    #[error("Duplicate row in table {table}: {key}")]
    DuplicateRow {
        /// The table name.
        table: String,
        /// The duplicated name.
        key: String,
    },

    /// Resolver configuration failed validation or parsing.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// Reading or writing a snapshot or config file failed.
    #[error("IO error on {path}: {source}")]
    Io {
        /// The file path.
        path: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A snapshot dump could not be decoded.
    #[error("Failed to decode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResolverError {
    /// Creates an invalid input error.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate row error.
    pub fn duplicate_row(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateRow {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error bound to a path.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<sonic_l3_types::ParseError> for ResolverError {
    fn from(err: sonic_l3_types::ParseError) -> Self {
        ResolverError::invalid_input("address", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolverError::invalid_input("ip4_address_secondary", "no addresses");
        assert_eq!(
            err.to_string(),
            "Invalid input for ip4_address_secondary: no addresses"
        );
    }

    #[test]
    fn test_duplicate_row() {
        let err = ResolverError::duplicate_row("VRF", "red");
        assert_eq!(err.to_string(), "Duplicate row in table VRF: red");
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: ResolverError =
            sonic_l3_types::ParseError::InvalidIpPrefix("1.2.3".to_string()).into();
        assert!(matches!(err, ResolverError::InvalidInput { .. }));
        assert!(err.to_string().contains("1.2.3"));
    }
}
