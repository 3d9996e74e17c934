//! Conversions between Transmission torrents and torrent-core records.

use seedsweep_torrent_core::{TorrentId, TorrentRecord, TorrentResult};
use transmission_rpc::types::Torrent;

use crate::error::decode;

/// Transmission's `TR_RATIO_INF`, reported when nothing was ever downloaded.
const RATIO_INFINITE: f64 = -2.0;

/// Map the daemon's sentinel ratios onto the non-negative domain.
pub(crate) fn normalize_ratio(raw: f64) -> f64 {
    if (raw - RATIO_INFINITE).abs() < f64::EPSILON {
        f64::INFINITY
    } else if raw < 0.0 {
        0.0
    } else {
        raw
    }
}

/// Build a record from a `torrent-get` entry. Only the hash is mandatory.
pub(crate) fn to_record(
    operation: &'static str,
    torrent: Torrent,
) -> TorrentResult<TorrentRecord> {
    let hash = torrent
        .hash_string
        .ok_or_else(|| decode(operation, "torrent without hashString"))?;

    Ok(TorrentRecord {
        id: TorrentId::new(hash),
        name: torrent.name.unwrap_or_default(),
        added_epoch: torrent.added_date.unwrap_or_default(),
        done_epoch: torrent.done_date.unwrap_or_default(),
        complete: torrent.left_until_done.is_none_or(|left| left == 0),
        ratio: normalize_ratio(torrent.upload_ratio.map_or(-1.0, f64::from)),
        trackers: torrent
            .trackers
            .unwrap_or_default()
            .into_iter()
            .map(|tracker| tracker.announce)
            .collect(),
    })
}
