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

//! Seedsweep run wiring.
//!
//! Layout: `bootstrap.rs` (one-shot run setup), `orchestrator.rs` (the purge
//! pass), `healthcheck.rs` (completion ping), `error.rs` (application errors).

/// Run bootstrap from CLI arguments.
pub mod bootstrap;
/// Application error types.
pub mod error;
/// Completion ping for external monitors.
pub mod healthcheck;
/// Purge pass over every torrent known to the daemon.
pub mod orchestrator;

pub use bootstrap::{RunArgs, run_app};
pub use error::{AppError, AppResult};
pub use healthcheck::HealthcheckPinger;
pub use orchestrator::{DecisionReport, RunSummary, run_purge};
