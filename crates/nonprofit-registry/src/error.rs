//! Error types for registry persistence and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for registry operations.
///
/// Lookups that miss are not errors; they surface as `None` or `false`
/// from the list and directory APIs.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Stored payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem access failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Storage key is unusable (empty, or not a valid file name)
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Build an I/O error tagged with the path involved.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = RegistryError::io(
            "/tmp/registry/orgs.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/registry/orgs.json"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_serialization_error_converts() {
        let parse = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: RegistryError = parse.into();
        assert!(matches!(err, RegistryError::Serialization(_)));
    }

    #[test]
    fn test_invalid_key_display() {
        let err = RegistryError::InvalidKey(String::new());
        assert_eq!(err.to_string(), "Invalid storage key: \"\"");
    }
}
