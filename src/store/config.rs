//! Store configuration from the environment
//!
//! Environment variables:
//! - `DATABASE_URL`: MongoDB connection string; absent means no backend
//! - `DATABASE_NAME`: database to select, defaults to `reluna`

use std::env;

/// Environment variable naming the MongoDB connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable naming the database to select.
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Database selected when `DATABASE_NAME` is not set.
const DEFAULT_DATABASE: &str = "reluna";

/// Connection settings for the MongoDB backend.
///
/// An unset or empty variable counts as absent. Without a URL the
/// process falls back to the in-memory store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Connection string, when configured
    pub url: Option<String>,
    /// Database name, when configured
    pub database: Option<String>,
}

impl StoreConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            url: non_empty(env::var(DATABASE_URL_VAR).ok()),
            database: non_empty(env::var(DATABASE_NAME_VAR).ok()),
        }
    }

    /// Whether a MongoDB backend is configured at all.
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// The database to select, falling back to the default name.
    pub fn database_or_default(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }
}

/// Treat empty and whitespace-only values as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
