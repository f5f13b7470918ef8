//! Logging setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` always wins; otherwise the level follows the `-v` count.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
