//! Observability
//!
//! Structured logging through the `tracing` ecosystem. The subscriber
//! is installed once at process start; modules emit events with the
//! `tracing` macros and `RUST_LOG` controls what is shown.

mod logging;

pub use logging::init_logging;
