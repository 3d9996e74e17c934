//! # Design
//!
//! - A torrent whose timestamp cannot be interpreted aborts the pass instead of being kept.
//! - Carry the torrent name, daemon field and raw value so the failure is reproducible.

use thiserror::Error;

/// Result type for retention evaluation.
pub type RetentionResult<T> = Result<T, RetentionError>;

/// Errors produced while evaluating retention rules.
#[derive(Debug, Error)]
pub enum RetentionError {
    /// The timestamp selected by the age basis is not a usable instant.
    #[error("unusable {field} timestamp {value} for torrent '{torrent}'")]
    Timestamp {
        /// Display name of the offending torrent.
        torrent: String,
        /// Daemon field the value was read from.
        field: &'static str,
        /// Raw value reported by the daemon.
        value: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_error_names_torrent_and_field() {
        let err = RetentionError::Timestamp {
            torrent: "Example".to_string(),
            field: "addedDate",
            value: -5,
        };
        assert_eq!(
            err.to_string(),
            "unusable addedDate timestamp -5 for torrent 'Example'"
        );
    }
}
