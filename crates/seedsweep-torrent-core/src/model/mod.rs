//! Torrent records and request types shared between adapters and the run.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use url::Url;

/// Opaque daemon handle used to address a torrent for removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TorrentId(String);

impl TorrentId {
    #[must_use]
    /// Wrap a daemon-issued identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TorrentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Torrent metadata as reported by the daemon.
///
/// Timestamps are kept exactly as the daemon emits them (unix seconds, with
/// `0` meaning "never"); interpreting them is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentRecord {
    /// Identifier used for removal.
    pub id: TorrentId,
    /// Display name.
    pub name: String,
    /// Unix seconds at which the torrent was added.
    pub added_epoch: i64,
    /// Unix seconds at which the download completed; `0` when the daemon never
    /// recorded a completion, including torrents added with data already on disk.
    pub done_epoch: i64,
    /// Whether every wanted byte is on disk.
    pub complete: bool,
    /// Upload to download ratio; never negative.
    pub ratio: f64,
    /// Tracker announce URLs, possibly empty.
    pub trackers: Vec<String>,
}

/// Options controlling how the daemon removes torrents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveTorrent {
    /// Whether to remove on-disk data alongside the torrent metadata.
    pub with_data: bool,
}

/// Where and how to reach the daemon's RPC interface.
#[derive(Clone)]
pub struct RpcEndpoint {
    /// Absolute RPC URL.
    pub url: Url,
    /// RPC username.
    pub username: String,
    /// RPC password.
    pub password: String,
    /// Request timeout; adapters apply their own default when `None`.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for RpcEndpoint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RpcEndpoint")
            .field("url", &self.url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
