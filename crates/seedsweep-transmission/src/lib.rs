#![recursion_limit = "256"]
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
#![allow(clippy::redundant_pub_crate)]

//! Transmission RPC adapter implementing the torrent-core client traits.
//!
//! Layout: `convert.rs` (daemon torrent to domain record), `session.rs`
//! (`transmission-rpc` client bounded by a request timeout), `error.rs`
//! (helpers building `TorrentError`).

mod convert;
mod error;
pub mod session;

pub use session::{DEFAULT_TIMEOUT, TransmissionConnector, TransmissionSession};
