//! Logging initialization.
//!
//! Human-readable `tracing` output on stderr, filtered by `RUST_LOG` when it
//! is set and by the configured level otherwise. Stdout stays reserved for
//! command output.

use tracing_subscriber::EnvFilter;

/// Call once at startup, before any `tracing` events are emitted.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
