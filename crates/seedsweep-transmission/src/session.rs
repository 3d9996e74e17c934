//! Session against a Transmission daemon.
//!
//! # Design
//! - `transmission-rpc` owns the wire protocol: basic auth, JSON envelopes and
//!   the `X-Transmission-Session-Id` negotiation.
//! - Every call is bounded by the endpoint timeout and issued one at a time.
//! - A result other than `success` is an RPC failure.

use std::error::Error;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use seedsweep_torrent_core::{
    RemoveTorrent, RpcEndpoint, TorrentClient, TorrentConnector, TorrentId, TorrentRecord,
    TorrentResult,
};
use tokio::time::timeout;
use tracing::{debug, info};
use transmission_rpc::SharableTransClient;
use transmission_rpc::types::{BasicAuth, Id, TorrentGetField};

use crate::convert::to_record;
use crate::error::{ensure_success, transport};

/// Request timeout applied when the endpoint does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const METHOD_SESSION_GET: &str = "session-get";
const METHOD_TORRENT_GET: &str = "torrent-get";
const METHOD_TORRENT_REMOVE: &str = "torrent-remove";

/// Opens [`TransmissionSession`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransmissionConnector;

#[async_trait]
impl TorrentConnector for TransmissionConnector {
    async fn connect(&self, endpoint: &RpcEndpoint) -> TorrentResult<Box<dyn TorrentClient>> {
        let session = TransmissionSession::open(endpoint).await?;
        Ok(Box::new(session))
    }
}

/// Authenticated session with a Transmission daemon.
pub struct TransmissionSession {
    client: SharableTransClient,
    timeout: Duration,
}

impl TransmissionSession {
    /// Build the client and perform a `session-get` round trip.
    ///
    /// # Errors
    ///
    /// Returns [`TorrentError::Transport`](seedsweep_torrent_core::TorrentError::Transport)
    /// when the daemon cannot be reached, rejects the credentials or does not
    /// answer within the timeout.
    pub async fn open(endpoint: &RpcEndpoint) -> TorrentResult<Self> {
        let client = SharableTransClient::with_auth(
            endpoint.url.clone(),
            BasicAuth {
                user: endpoint.username.clone(),
                password: endpoint.password.clone(),
            },
        );
        let session = Self {
            client,
            timeout: endpoint.timeout.unwrap_or(DEFAULT_TIMEOUT),
        };

        let response = session
            .bounded(METHOD_SESSION_GET, session.client.session_get())
            .await?;
        ensure_success(METHOD_SESSION_GET, response.result)?;
        info!(url = %endpoint.url, "connected to transmission");
        Ok(session)
    }

    async fn bounded<T, E, F>(&self, operation: &'static str, call: F) -> TorrentResult<T>
    where
        F: Future<Output = Result<T, E>> + Send,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        timeout(self.timeout, call)
            .await
            .map_err(|elapsed| transport(operation, elapsed))?
            .map_err(|err| transport(operation, err))
    }
}

#[async_trait]
impl TorrentClient for TransmissionSession {
    async fn list_torrents(&self) -> TorrentResult<Vec<TorrentRecord>> {
        let fields = vec![
            TorrentGetField::HashString,
            TorrentGetField::Name,
            TorrentGetField::AddedDate,
            TorrentGetField::DoneDate,
            TorrentGetField::LeftUntilDone,
            TorrentGetField::UploadRatio,
            TorrentGetField::Trackers,
        ];
        let response = self
            .bounded(
                METHOD_TORRENT_GET,
                self.client.torrent_get(Some(fields), None),
            )
            .await?;
        ensure_success(METHOD_TORRENT_GET, response.result)?;

        let torrents = response.arguments.torrents;
        debug!(count = torrents.len(), "listed torrents");
        torrents
            .into_iter()
            .map(|torrent| to_record(METHOD_TORRENT_GET, torrent))
            .collect()
    }

    async fn remove_torrent(&self, id: &TorrentId, options: RemoveTorrent) -> TorrentResult<()> {
        let response = self
            .bounded(
                METHOD_TORRENT_REMOVE,
                self.client
                    .torrent_remove(vec![Id::Hash(id.as_str().to_string())], options.with_data),
            )
            .await?;
        ensure_success(METHOD_TORRENT_REMOVE, response.result)?;
        debug!(torrent_id = %id, with_data = options.with_data, "removed torrent");
        Ok(())
    }
}
