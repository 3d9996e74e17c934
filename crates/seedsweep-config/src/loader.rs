//! YAML document loading.
//!
//! # Design
//! - Deserialize into an all-optional document so missing keys are reported by name.
//! - Policy thresholds are never defaulted; a document without them is rejected.
//! - The file is read exactly once per call and nothing else is touched.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::defaults::{DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_RPC_PATH};
use crate::error::{ConfigError, ConfigResult};
use crate::model::{
    AgeBasis, Configuration, ConnectionConfig, LogFormatSetting, LoggingSettings, RetentionPolicy,
};
use crate::validate::{
    build_rpc_url, non_empty, normalize_trackers, parse_healthcheck_url, require, validate_port,
    validate_ratio, validate_timeout,
};

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    host: Option<String>,
    port: Option<u16>,
    rpc_path: Option<String>,
    https: Option<bool>,
    timeout_secs: Option<u64>,
    user: Option<String>,
    passwd: Option<String>,
    criteria: Option<CriteriaDocument>,
    hc_url: Option<String>,
    logging: Option<LoggingDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct CriteriaDocument {
    min_days: Option<u32>,
    max_days: Option<u32>,
    min_ratio: Option<f64>,
    age_basis: Option<String>,
    #[serde(default)]
    excluded_trackers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingDocument {
    level: Option<String>,
    format: Option<String>,
    file: Option<std::path::PathBuf>,
}

/// Read and validate the configuration file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, and the errors of
/// [`parse_str`] for its contents.
pub fn load(path: &Path) -> ConfigResult<Configuration> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_str(&raw)?;
    debug!(
        path = %path.display(),
        rpc_url = %config.connection.rpc_url,
        age_basis = config.policy.age_basis.as_str(),
        "configuration loaded"
    );
    Ok(config)
}

/// Parse and validate a YAML configuration document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed YAML, [`ConfigError::MissingField`]
/// when a required key is absent and [`ConfigError::InvalidField`] for values
/// that fail validation.
pub fn parse_str(raw: &str) -> ConfigResult<Configuration> {
    let document: ConfigDocument =
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
    Configuration::try_from(document)
}

impl TryFrom<ConfigDocument> for Configuration {
    type Error = ConfigError;

    fn try_from(document: ConfigDocument) -> ConfigResult<Self> {
        let username = non_empty(require(document.user, "user")?, "user")?;
        let password = require(document.passwd, "passwd")?;
        let policy = RetentionPolicy::try_from(require(document.criteria, "criteria")?)?;

        let host = document.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = validate_port(document.port.unwrap_or(DEFAULT_PORT))?;
        let rpc_path = document
            .rpc_path
            .unwrap_or_else(|| DEFAULT_RPC_PATH.to_string());
        let rpc_url = build_rpc_url(
            host.trim(),
            port,
            rpc_path.trim(),
            document.https.unwrap_or(false),
        )?;
        let timeout = document.timeout_secs.map(validate_timeout).transpose()?;

        let healthcheck_url = document
            .hc_url
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_healthcheck_url)
            .transpose()?;

        Ok(Self {
            connection: ConnectionConfig {
                rpc_url,
                username,
                password,
                timeout,
            },
            policy,
            healthcheck_url,
            logging: LoggingSettings::try_from(document.logging.unwrap_or_default())?,
        })
    }
}

impl TryFrom<CriteriaDocument> for RetentionPolicy {
    type Error = ConfigError;

    fn try_from(criteria: CriteriaDocument) -> ConfigResult<Self> {
        let min_days = require(criteria.min_days, "criteria.min_days")?;
        let max_days = require(criteria.max_days, "criteria.max_days")?;
        let min_ratio = validate_ratio(require(criteria.min_ratio, "criteria.min_ratio")?)?;
        let age_basis = criteria
            .age_basis
            .as_deref()
            .map(str::parse::<AgeBasis>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            min_days,
            max_days,
            min_ratio,
            age_basis,
            excluded_trackers: normalize_trackers(criteria.excluded_trackers)?,
        })
    }
}

impl TryFrom<LoggingDocument> for LoggingSettings {
    type Error = ConfigError;

    fn try_from(logging: LoggingDocument) -> ConfigResult<Self> {
        let level = match logging.level {
            Some(level) => non_empty(level, "logging.level")?,
            None => DEFAULT_LOG_LEVEL.to_string(),
        };
        let format = logging
            .format
            .as_deref()
            .map(str::parse::<LogFormatSetting>)
            .transpose()?;

        Ok(Self {
            level,
            format,
            file: logging.file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
user: admin
passwd: secret
criteria:
  min_days: 60
  max_days: 80
  min_ratio: 3
";

    #[test]
    fn minimal_document_applies_defaults() -> ConfigResult<()> {
        let config = parse_str(MINIMAL)?;
        assert_eq!(
            config.connection.rpc_url.as_str(),
            "http://localhost:9091/transmission/rpc"
        );
        assert_eq!(config.connection.username, "admin");
        assert_eq!(config.connection.password, "secret");
        assert!(config.connection.timeout.is_none());
        assert_eq!(config.policy.min_days, 60);
        assert_eq!(config.policy.max_days, 80);
        assert!((config.policy.min_ratio - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.policy.age_basis, AgeBasis::Completed);
        assert!(config.policy.excluded_trackers.is_empty());
        assert!(config.healthcheck_url.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.format.is_none());
        Ok(())
    }

    #[test]
    fn full_document_is_honoured() -> ConfigResult<()> {
        let config = parse_str(
            "
host: seedbox.lan
port: 9092
rpc_path: /torrent/rpc
https: true
timeout_secs: 30
user: admin
passwd: secret
criteria:
  min_days: 10
  max_days: 20
  min_ratio: 1.5
  age_basis: added
  excluded_trackers:
    - private.example
hc_url: https://hc-ping.com/0000
logging:
  level: debug
  format: json
  file: /var/log/seedsweep.log
",
        )?;
        assert_eq!(
            config.connection.rpc_url.as_str(),
            "https://seedbox.lan:9092/torrent/rpc"
        );
        assert_eq!(
            config.connection.timeout,
            Some(std::time::Duration::from_secs(30))
        );
        assert_eq!(config.policy.age_basis, AgeBasis::Added);
        assert_eq!(config.policy.excluded_trackers, vec!["private.example"]);
        assert_eq!(
            config.healthcheck_url.as_ref().map(url::Url::as_str),
            Some("https://hc-ping.com/0000")
        );
        assert_eq!(config.logging.format, Some(LogFormatSetting::Json));
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("/var/log/seedsweep.log"))
        );
        Ok(())
    }

    #[test]
    fn missing_policy_keys_are_reported_by_name() {
        let without_ratio = MINIMAL.replace("  min_ratio: 3\n", "");
        assert!(matches!(
            parse_str(&without_ratio),
            Err(ConfigError::MissingField {
                field: "criteria.min_ratio"
            })
        ));

        let without_criteria = "user: admin\npasswd: secret\n";
        assert!(matches!(
            parse_str(without_criteria),
            Err(ConfigError::MissingField { field: "criteria" })
        ));

        let without_password = MINIMAL.replace("passwd: secret\n", "");
        assert!(matches!(
            parse_str(&without_password),
            Err(ConfigError::MissingField { field: "passwd" })
        ));
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        assert!(matches!(
            parse_str("user: [unterminated"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            parse_str("- just\n- a list\n"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            parse_str(&MINIMAL.replace("min_days: 60", "min_days: -1")),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse_str(&MINIMAL.replace("min_ratio: 3", "min_ratio: -2")),
            Err(ConfigError::InvalidField {
                field: "criteria.min_ratio",
                ..
            })
        ));
        assert!(matches!(
            parse_str(&format!("{MINIMAL}hc_url: not-a-url\n")),
            Err(ConfigError::InvalidField {
                field: "hc_url",
                ..
            })
        ));
        assert!(matches!(
            parse_str(&format!("{MINIMAL}port: 0\n")),
            Err(ConfigError::InvalidField { field: "port", .. })
        ));
        assert!(matches!(
            parse_str(&MINIMAL.replace("user: admin", "user: \"  \"")),
            Err(ConfigError::InvalidField { field: "user", .. })
        ));
    }

    #[test]
    fn inverted_thresholds_are_accepted_as_written() -> ConfigResult<()> {
        let config = parse_str(
            &MINIMAL
                .replace("min_days: 60", "min_days: 90")
                .replace("max_days: 80", "max_days: 30"),
        )?;
        assert_eq!(config.policy.min_days, 90);
        assert_eq!(config.policy.max_days, 30);
        Ok(())
    }
}
