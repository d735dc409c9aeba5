//! Document store backends
//!
//! The API persists records through the [`DocumentStore`] trait. Two
//! backends implement it: [`MongoStore`] against a MongoDB deployment
//! and [`MemoryStore`], a process-local fallback used when no database
//! is configured and as a test double.
//!
//! Stored documents carry their identifier under the store-native
//! [`INTERNAL_ID`] key; the gateway renames it for clients.

mod config;
mod errors;
mod filter;
mod memory;
mod mongo;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::ResourceKind;

pub use config::StoreConfig;
pub use errors::{StorageError, StorageResult};
pub use filter::ExactMatch;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Store-native identifier key on persisted documents.
pub const INTERNAL_ID: &str = "_id";

/// Persistence seam between the gateway and a concrete backend.
///
/// A backend owns one collection per resource kind, named by the kind
/// tag. `query` returns documents in insertion order with the
/// identifier already stringified under [`INTERNAL_ID`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a validated record, returning its new identifier.
    async fn insert(
        &self,
        kind: ResourceKind,
        fields: Map<String, Value>,
    ) -> StorageResult<String>;

    /// Fetch every document of `kind`, optionally narrowed by an
    /// exact-match filter.
    async fn query(
        &self,
        kind: ResourceKind,
        filter: Option<&ExactMatch>,
    ) -> StorageResult<Vec<Value>>;

    /// Probe the backend and describe what was found. Never fails;
    /// trouble is reported inside the snapshot.
    async fn diagnostics(&self) -> StoreDiagnostics;
}

/// Snapshot of a backend's health, served by the diagnostics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StoreDiagnostics {
    /// Backend flavor, `"mongodb"` or `"memory"`
    pub backend: &'static str,
    /// Whether the backend answered a liveness probe
    pub connected: bool,
    /// Database name, when one is selected
    pub database: Option<String>,
    /// Collection names present, capped at ten
    pub collections: Vec<String>,
    /// Probe failure detail, when the probe failed
    pub error: Option<String>,
}
