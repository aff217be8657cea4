//! Logging bootstrap.
//!
//! Log lines go to stderr so task output on stdout stays clean. The level
//! defaults to `info` and can be overridden with `RUST_LOG`. Logging is a
//! side channel: nothing in dispatch depends on it for correctness.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
