//! Structured logging setup
//!
//! Configures a `tracing` fmt subscriber filtered by `RUST_LOG`,
//! defaulting to `info` when the variable is unset or malformed.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber. Idempotent; later calls
/// are no-ops, so tests and the CLI can both call it freely.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    });
}
