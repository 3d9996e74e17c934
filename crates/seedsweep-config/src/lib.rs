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

//! File-backed configuration for a seedsweep run.
//!
//! Layout: `model.rs` (typed, validated configuration), `loader.rs` (YAML
//! document parsing), `validate.rs` (field checks), `defaults.rs` (connection
//! defaults).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
mod validate;

pub use defaults::{DEFAULT_CONFIG_FILE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RPC_PATH};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load, parse_str};
pub use model::{
    AgeBasis, Configuration, ConnectionConfig, LogFormatSetting, LoggingSettings, RetentionPolicy,
};
