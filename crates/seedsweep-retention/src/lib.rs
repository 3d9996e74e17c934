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
#![allow(clippy::module_name_repetitions)]

//! Age and ratio retention rules deciding which torrents are purged.
//!
//! Layout: `model/` (decisions and matched rules), `service.rs` (the
//! evaluator), `error.rs` (timestamp failures).

pub mod error;
pub mod model;
pub mod service;

pub use error::{RetentionError, RetentionResult};
pub use model::{Decision, Rule, Verdict};
pub use service::RetentionEvaluator;
