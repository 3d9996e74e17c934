//! # Design
//!
//! - Map client, timeout and decode failures onto `TorrentError` with the RPC method as context.
//! - Keep `transmission-rpc` error types out of the torrent-core error surface by boxing sources.

use std::error::Error;

use seedsweep_torrent_core::{TorrentError, TorrentResult};

const RESULT_SUCCESS: &str = "success";

/// Build a transport error for a failed or timed out request.
pub(crate) fn transport(
    operation: &'static str,
    source: impl Into<Box<dyn Error + Send + Sync>>,
) -> TorrentError {
    TorrentError::Transport {
        operation,
        source: source.into(),
    }
}

/// Build a decode error for an unusable response.
pub(crate) fn decode(
    operation: &'static str,
    source: impl Into<Box<dyn Error + Send + Sync>>,
) -> TorrentError {
    TorrentError::Decode {
        operation,
        source: source.into(),
    }
}

/// Reject responses whose `result` is anything but `success`.
pub(crate) fn ensure_success(operation: &'static str, result: String) -> TorrentResult<()> {
    if result == RESULT_SUCCESS {
        Ok(())
    } else {
        Err(TorrentError::Rpc {
            operation,
            message: result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn helpers_build_expected_variants() {
        let err = transport("session-get", io::Error::other("refused"));
        assert!(matches!(
            err,
            TorrentError::Transport {
                operation: "session-get",
                ..
            }
        ));

        let err = decode("torrent-get", "missing hashString");
        match err {
            TorrentError::Decode { operation, source } => {
                assert_eq!(operation, "torrent-get");
                assert_eq!(source.to_string(), "missing hashString");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn only_success_results_pass() {
        assert!(ensure_success("torrent-remove", "success".to_string()).is_ok());
        assert!(matches!(
            ensure_success("torrent-remove", "no such torrent".to_string()),
            Err(TorrentError::Rpc { message, .. }) if message == "no such torrent"
        ));
    }
}
