//! Connection defaults applied when the document omits them.
//!
//! # Design
//! - Match the stock Transmission daemon so a minimal document only carries credentials.

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "seedsweep.yml";
/// Host used when `host` is absent.
pub const DEFAULT_HOST: &str = "localhost";
/// RPC port used when `port` is absent.
pub const DEFAULT_PORT: u16 = 9091;
/// RPC endpoint path used when `rpc_path` is absent.
pub const DEFAULT_RPC_PATH: &str = "/transmission/rpc";
/// Log level used when `logging.level` is absent.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
