//! Typed configuration models.
//!
//! # Design
//! - Pure, immutable data carriers produced once by the loader.
//! - Keeps the YAML document shape private to `loader.rs`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Fully validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Remote daemon connection settings.
    pub connection: ConnectionConfig,
    /// Retention thresholds and exclusions.
    pub policy: RetentionPolicy,
    /// Endpoint pinged after a successful pass.
    pub healthcheck_url: Option<Url>,
    /// Log level, format and destination.
    pub logging: LoggingSettings,
}

/// Credentials and endpoint for the torrent daemon RPC interface.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Absolute RPC endpoint URL.
    pub rpc_url: Url,
    /// RPC username.
    pub username: String,
    /// RPC password.
    pub password: String,
    /// Request timeout override; the adapter default applies when `None`.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConnectionConfig")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Age and ratio thresholds deciding when a torrent is purged.
///
/// `min_days` is expected to be the smaller threshold; the ordering is the
/// caller's responsibility and is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionPolicy {
    /// Age after which torrents seeded above `min_ratio` are purged.
    pub min_days: u32,
    /// Age after which torrents seeded below `min_ratio` are purged.
    pub max_days: u32,
    /// Ratio threshold separating the two purge rules.
    pub min_ratio: f64,
    /// Which daemon timestamp the age is measured from.
    pub age_basis: AgeBasis,
    /// Tracker announce substrings that protect a torrent from purging.
    pub excluded_trackers: Vec<String>,
}

/// Timestamp used as the start of a torrent's age.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgeBasis {
    /// Time the download finished.
    #[default]
    Completed,
    /// Time the torrent was added to the daemon.
    Added,
}

impl AgeBasis {
    #[must_use]
    /// Render the basis as its lowercase string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Added => "added",
        }
    }
}

impl FromStr for AgeBasis {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "completed" => Ok(Self::Completed),
            "added" => Ok(Self::Added),
            other => Err(ConfigError::invalid(
                "criteria.age_basis",
                Some(other.to_string()),
                "must be 'completed' or 'added'",
            )),
        }
    }
}

/// Logging preferences carried in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format; inferred from the build profile when `None`.
    pub format: Option<LogFormatSetting>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Output format requested for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatSetting {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormatSetting {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::invalid(
                "logging.format",
                Some(other.to_string()),
                "must be 'pretty' or 'json'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_basis_parses_known_values() {
        assert_eq!("completed".parse::<AgeBasis>().ok(), Some(AgeBasis::Completed));
        assert_eq!("added".parse::<AgeBasis>().ok(), Some(AgeBasis::Added));
        assert!(matches!(
            "done".parse::<AgeBasis>(),
            Err(ConfigError::InvalidField {
                field: "criteria.age_basis",
                ..
            })
        ));
        assert_eq!(AgeBasis::default().as_str(), "completed");
    }

    #[test]
    fn connection_debug_redacts_password() -> Result<(), url::ParseError> {
        let connection = ConnectionConfig {
            rpc_url: Url::parse("http://localhost:9091/transmission/rpc")?,
            username: "admin".to_string(),
            password: "hunter2".to_string(),
            timeout: None,
        };
        let rendered = format!("{connection:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
        Ok(())
    }
}
