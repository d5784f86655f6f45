//! Logging setup.
//!
//! The library only emits `tracing` events; hosts that want them on stderr
//! call [`init_logging`] once at startup.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over [`Config::log_level`]. Returns `false` if
/// a global subscriber was already installed.
pub fn init_logging(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
