//! Structured error types for catalogctl-core.
//!
//! Gateways never return these: list and delete failures are translated to
//! sentinel values at the gateway boundary. These cover setup (configuration,
//! identifier validation, pool creation). The binary wraps them in `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for catalogctl-core setup
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file is not valid TOML for [`crate::CatalogConfig`]
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("Failed to serialize config: {source}")]
    ConfigSerialize {
        #[from]
        source: toml::ser::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Configured table or key column is not a usable identifier
    #[error("Invalid {resource} configuration: {source}")]
    Validation {
        resource: &'static str,
        source: ValidationError,
    },

    /// Pool creation failed
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },
}

/// Result type alias for catalogctl-core setup
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a validation error for a resource
    pub fn validation(resource: &'static str, source: ValidationError) -> Self {
        Self::Validation { resource, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::config("Config not found at \"/tmp/missing.toml\"");
        assert_eq!(
            err.to_string(),
            "Configuration error: Config not found at \"/tmp/missing.toml\""
        );

        let err = CatalogError::validation("players", ValidationError::Empty { field: "table" });
        assert_eq!(
            err.to_string(),
            "Invalid players configuration: table cannot be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: CatalogError = io_err.into();

        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
