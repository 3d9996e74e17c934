//! Validation helpers for configuration documents.

use std::time::Duration;

use url::Url;

use crate::error::{ConfigError, ConfigResult};

pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> ConfigResult<T> {
    value.ok_or(ConfigError::MissingField { field })
}

pub(crate) fn non_empty(value: String, field: &'static str) -> ConfigResult<String> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, None, "must not be empty"));
    }
    Ok(value)
}

pub(crate) fn validate_port(port: u16) -> ConfigResult<u16> {
    if port == 0 {
        return Err(ConfigError::invalid(
            "port",
            Some(port.to_string()),
            "must be between 1 and 65535",
        ));
    }
    Ok(port)
}

pub(crate) fn validate_ratio(ratio: f64) -> ConfigResult<f64> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(ConfigError::invalid(
            "criteria.min_ratio",
            Some(ratio.to_string()),
            "must be a finite, non-negative number",
        ));
    }
    Ok(ratio)
}

pub(crate) fn validate_timeout(seconds: u64) -> ConfigResult<Duration> {
    if seconds == 0 {
        return Err(ConfigError::invalid(
            "timeout_secs",
            Some(seconds.to_string()),
            "must be positive",
        ));
    }
    Ok(Duration::from_secs(seconds))
}

pub(crate) fn build_rpc_url(host: &str, port: u16, path: &str, https: bool) -> ConfigResult<Url> {
    if !path.starts_with('/') {
        return Err(ConfigError::invalid(
            "rpc_path",
            Some(path.to_string()),
            "must start with '/'",
        ));
    }
    let scheme = if https { "https" } else { "http" };
    let mut url = Url::parse(&format!("{scheme}://{host}:{port}"))
        .map_err(|_| ConfigError::invalid("host", Some(host.to_string()), "not a valid host"))?;
    url.set_path(path);
    Ok(url)
}

pub(crate) fn parse_healthcheck_url(raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|_| ConfigError::invalid("hc_url", Some(raw.to_string()), "not a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            "hc_url",
            Some(raw.to_string()),
            "must use http or https",
        ));
    }
    Ok(url)
}

pub(crate) fn normalize_trackers(patterns: Vec<String>) -> ConfigResult<Vec<String>> {
    patterns
        .into_iter()
        .map(|pattern| {
            let trimmed = pattern.trim();
            if trimmed.is_empty() {
                Err(ConfigError::invalid(
                    "criteria.excluded_trackers",
                    None,
                    "entries must not be empty",
                ))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}
