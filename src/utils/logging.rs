//! Diagnostic logging bootstrap.
//!
//! Events go to stderr so stdout stays reserved for command output that
//! scripts may capture. `RUST_LOG` wins over the `-v` flags when set.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn, info, then debug and beyond
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which happens
/// when the library is embedded or exercised from several tests.
pub fn init_logging(verbose: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok()
}
