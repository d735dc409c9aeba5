//! HTTP server configuration
//!
//! Bind address for the API server. The `PORT` environment variable
//! overrides the default port, matching common platform conventions.

use std::env;

/// Environment variable overriding the listen port.
pub const PORT_VAR: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to bind to (default: 8000)
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// An unparseable `PORT` falls back to the default with a warning.
    pub fn from_env() -> Self {
        let port = match env::var(PORT_VAR) {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable PORT, using default");
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        Self {
            host: DEFAULT_HOST.to_string(),
            port,
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
