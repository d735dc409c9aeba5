//! CLI module
//!
//! Provides the command-line interface:
//! - serve: start the API server
//! - check: one-shot store diagnostics

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, serve};
pub use errors::{CliError, CliResult};
