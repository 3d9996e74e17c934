//! Capability traits implemented by daemon adapters.

use async_trait::async_trait;

use crate::error::TorrentResult;
use crate::model::{RemoveTorrent, RpcEndpoint, TorrentId, TorrentRecord};

/// Opens sessions against a torrent daemon.
#[async_trait]
pub trait TorrentConnector: Send + Sync {
    /// Establish an authenticated session with the daemon at `endpoint`.
    async fn connect(&self, endpoint: &RpcEndpoint) -> TorrentResult<Box<dyn TorrentClient>>;
}

/// Operations available on an open daemon session.
#[async_trait]
pub trait TorrentClient: Send + Sync {
    /// Enumerate every torrent currently known to the daemon, in daemon order.
    async fn list_torrents(&self) -> TorrentResult<Vec<TorrentRecord>>;

    /// Remove a torrent, optionally deleting its downloaded data.
    async fn remove_torrent(&self, id: &TorrentId, options: RemoveTorrent) -> TorrentResult<()>;
}
