//! Tracing subscriber setup for the CLI.
//!
//! Log lines go to stderr so that command output on stdout stays parseable.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `filter` (e.g. `warn`,
/// `handscope_engine=debug`). Returns `false` if a subscriber was already
/// installed, which happens when `run` is called more than once in a process.
pub fn init(filter: &str) -> bool {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
