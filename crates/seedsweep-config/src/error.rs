//! Error types for configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The document was not valid YAML or had the wrong shape.
    #[error("failed to parse configuration document")]
    Parse {
        /// Source YAML error.
        source: serde_yaml::Error,
    },
    /// A required key was absent from the document.
    #[error("missing configuration field '{field}'")]
    MissingField {
        /// Dotted key path of the missing field.
        field: &'static str,
    },
    /// Field contained an invalid value.
    #[error("invalid configuration field '{field}': {reason}")]
    InvalidField {
        /// Dotted key path of the offending field.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(
        field: &'static str,
        value: Option<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            field,
            value,
            reason,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
