//! CLI command implementations
//!
//! Both commands build their own tokio runtime: the entry point stays
//! synchronous and async scope is confined to the command body.

use std::sync::Arc;

use crate::http_server::{ApiState, HttpServer, HttpServerConfig};
use crate::observability::init_logging;
use crate::store::{DocumentStore, MemoryStore, MongoStore, StoreConfig, StoreDiagnostics};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { host, port } => serve(host, port),
        Command::Check => check(),
    }
}

/// Start the API server.
///
/// Flags override the environment, the environment overrides defaults.
/// With a `DATABASE_URL` configured the server runs against MongoDB;
/// otherwise it falls back to the in-memory store and says so.
pub fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = apply_overrides(HttpServerConfig::from_env(), host, port);
    let store_config = StoreConfig::from_env();

    let runtime = build_runtime()?;
    runtime.block_on(async {
        if store_config.is_configured() {
            let store = MongoStore::connect(&store_config).await?;
            tracing::info!(
                database = %store_config.database_or_default(),
                "using mongodb store"
            );
            run_server(config, store).await
        } else {
            tracing::warn!("no DATABASE_URL configured, falling back to in-memory store");
            run_server(config, MemoryStore::new()).await
        }
    })
}

/// Probe the configured store and print its diagnostics as JSON.
///
/// The command-line twin of `GET /test`.
pub fn check() -> CliResult<()> {
    let store_config = StoreConfig::from_env();

    let runtime = build_runtime()?;
    let diagnostics: StoreDiagnostics = runtime.block_on(async {
        if store_config.is_configured() {
            let store = MongoStore::connect(&store_config).await?;
            Ok::<_, CliError>(store.diagnostics().await)
        } else {
            Ok(MemoryStore::new().diagnostics().await)
        }
    })?;

    println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    Ok(())
}

fn build_runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime_error(format!("failed to create tokio runtime: {}", e)))
}

async fn run_server<S: DocumentStore + 'static>(
    config: HttpServerConfig,
    store: S,
) -> CliResult<()> {
    let state = Arc::new(ApiState::new(Arc::new(store)));
    let server = HttpServer::new(config, state);
    server
        .start()
        .await
        .map_err(|e| CliError::server_error(format!("HTTP server failed: {}", e)))
}

fn apply_overrides(
    mut config: HttpServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> HttpServerConfig {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = apply_overrides(
            HttpServerConfig::with_port(8000),
            Some("127.0.0.1".to_string()),
            Some(9000),
        );
        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let config = apply_overrides(HttpServerConfig::with_port(8000), None, None);
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
    }
}
