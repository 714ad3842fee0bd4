//! Diagnostic logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `rtrainwatch=debug`.
pub const LOG_ENV: &str = "RTRAINWATCH_LOG";

const DEFAULT_FILTER: &str = "rtrainwatch=warn";

/// Install the global subscriber. Diagnostics go to stderr so they never mix
/// with command output on stdout. Calling it twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
