//! CLI argument definitions using clap
//!
//! Commands:
//! - reluna serve [--host H] [--port P]
//! - reluna check

use clap::{Parser, Subcommand};

/// Catalog, content, and impact-tracking API for reusable menstrual products
#[derive(Parser, Debug)]
#[command(name = "reluna")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Host to bind to (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Probe the configured store and print diagnostics as JSON
    Check,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
