//! # Design
//!
//! - Centralize application-level errors for bootstrap and the purge pass.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: seedsweep_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: seedsweep_telemetry::TelemetryError,
    },
    /// Torrent daemon operations failed.
    #[error("torrent operation failed")]
    Torrent {
        /// Operation identifier.
        operation: &'static str,
        /// Source torrent error.
        source: seedsweep_torrent_core::TorrentError,
    },
    /// Retention evaluation failed for a torrent.
    #[error("retention evaluation failed")]
    Retention {
        /// Operation identifier.
        operation: &'static str,
        /// Source retention error.
        source: seedsweep_retention::RetentionError,
    },
    /// HTTP client construction failed.
    #[error("http client setup failed")]
    HttpClient {
        /// Operation identifier.
        operation: &'static str,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// HTTP client operations failed.
    #[error("http operation failed")]
    Http {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// HTTP response returned a non-success status.
    #[error("http response status {status}")]
    HttpStatus {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: seedsweep_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: seedsweep_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn torrent(
        operation: &'static str,
        source: seedsweep_torrent_core::TorrentError,
    ) -> Self {
        Self::Torrent { operation, source }
    }

    pub(crate) const fn retention(
        operation: &'static str,
        source: seedsweep_retention::RetentionError,
    ) -> Self {
        Self::Retention { operation, source }
    }

    pub(crate) const fn http(operation: &'static str, url: String, source: reqwest::Error) -> Self {
        Self::Http {
            operation,
            url,
            source,
        }
    }

    /// Whether the failure happened while loading configuration, before any
    /// remote contact.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn app_error_helpers_build_variants() {
        let config = AppError::config(
            "config.load",
            seedsweep_config::ConfigError::MissingField {
                field: "criteria.min_ratio",
            },
        );
        assert!(matches!(
            config,
            AppError::Config {
                operation: "config.load",
                ..
            }
        ));
        assert!(config.is_config());

        let torrent = AppError::torrent(
            "torrent.connect",
            seedsweep_torrent_core::TorrentError::Transport {
                operation: "session-get",
                source: Box::new(std::io::Error::other("401 Unauthorized")),
            },
        );
        assert!(matches!(torrent, AppError::Torrent { .. }));
        assert!(!torrent.is_config());

        let retention = AppError::retention(
            "retention.evaluate",
            seedsweep_retention::RetentionError::Timestamp {
                torrent: "Example".to_string(),
                field: "doneDate",
                value: -1,
            },
        );
        assert!(matches!(retention, AppError::Retention { .. }));
    }

    #[test]
    fn app_error_messages_keep_source_chain() {
        let err = AppError::config(
            "config.load",
            seedsweep_config::ConfigError::MissingField { field: "passwd" },
        );
        assert_eq!(err.to_string(), "configuration operation failed");
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("missing configuration field 'passwd'")
        );

        let status = AppError::HttpStatus {
            operation: "healthcheck.ping",
            url: "https://hc-ping.com/abc".to_string(),
            status: 503,
        };
        assert_eq!(status.to_string(), "http response status 503");
        assert!(status.source().is_none());
    }
}
