//! Error types for torrent daemon operations.

use std::error::Error;

use thiserror::Error;

/// Primary error type for torrent daemon operations.
#[derive(Debug, Error)]
pub enum TorrentError {
    /// The request to the daemon failed or was refused.
    #[error("torrent daemon request failed during {operation}")]
    Transport {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying transport failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The daemon processed the call but reported a failure.
    #[error("torrent daemon reported failure during {operation}: {message}")]
    Rpc {
        /// Operation identifier.
        operation: &'static str,
        /// Result string reported by the daemon.
        message: String,
    },
    /// The daemon response could not be decoded.
    #[error("malformed torrent daemon response during {operation}")]
    Decode {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying decode failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Convenience alias for torrent operation results.
pub type TorrentResult<T> = Result<T, TorrentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn messages_carry_operation_context() {
        let transport = TorrentError::Transport {
            operation: "torrent-get",
            source: Box::new(io::Error::other("connection refused")),
        };
        assert_eq!(
            transport.to_string(),
            "torrent daemon request failed during torrent-get"
        );
        assert!(transport.source().is_some());

        let rpc = TorrentError::Rpc {
            operation: "torrent-remove",
            message: "invalid argument".to_string(),
        };
        assert_eq!(
            rpc.to_string(),
            "torrent daemon reported failure during torrent-remove: invalid argument"
        );
    }
}
