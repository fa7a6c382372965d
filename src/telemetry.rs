//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `bookmarker=debug`.
pub const LOG_ENV: &str = "BOOKMARKER_LOG";

/// Installs a stderr `fmt` subscriber. Defaults to `info` when `BOOKMARKER_LOG` is unset or invalid.
/// Calling it more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
