#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Daemon-agnostic torrent records and client capability traits.
//!
//! Layout: `model/` (records and request types), `service/` (connector and
//! client traits implemented by adapters), `error.rs` (adapter errors).

pub mod error;
pub mod model;
pub mod service;

pub use error::{TorrentError, TorrentResult};
pub use model::{RemoveTorrent, RpcEndpoint, TorrentId, TorrentRecord};
pub use service::{TorrentClient, TorrentConnector};
