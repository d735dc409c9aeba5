//! In-memory document store
//!
//! Process-local backend holding one document list per kind. Serves as
//! the fallback when no database is configured and as the test double
//! for the HTTP layer. Contents vanish on restart.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::schema::ResourceKind;
use crate::store::errors::{StorageError, StorageResult};
use crate::store::filter::ExactMatch;
use crate::store::{DocumentStore, StoreDiagnostics, INTERNAL_ID};

/// Maximum collection names reported by diagnostics.
const DIAGNOSTIC_COLLECTION_LIMIT: usize = 10;

/// Thread-safe in-memory backend. Documents keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held for `kind`.
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.collections
            .read()
            .map(|c| c.get(kind.as_str()).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        kind: ResourceKind,
        mut fields: Map<String, Value>,
    ) -> StorageResult<String> {
        let id = Uuid::new_v4().to_string();
        fields.insert(INTERNAL_ID.to_string(), Value::String(id.clone()));

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".into()))?;
        collections
            .entry(kind.as_str().to_string())
            .or_default()
            .push(Value::Object(fields));

        Ok(id)
    }

    async fn query(
        &self,
        kind: ResourceKind,
        filter: Option<&ExactMatch>,
    ) -> StorageResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".into()))?;

        let documents = match collections.get(kind.as_str()) {
            Some(documents) => documents,
            None => return Ok(Vec::new()),
        };

        Ok(documents
            .iter()
            .filter(|doc| filter.is_none_or(|f| f.matches(doc)))
            .cloned()
            .collect())
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        let mut collections: Vec<String> = self
            .collections
            .read()
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default();
        collections.sort();
        collections.truncate(DIAGNOSTIC_COLLECTION_LIMIT);

        StoreDiagnostics {
            backend: "memory",
            connected: true,
            database: None,
            collections,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store
            .insert(ResourceKind::Product, fields(json!({"name": "Luna Cup"})))
            .await
            .unwrap();
        let b = store
            .insert(ResourceKind::Product, fields(json!({"name": "Flow Pad"})))
            .await
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(store.count(ResourceKind::Product), 2);
    }

    #[tokio::test]
    async fn test_query_returns_documents_with_internal_id() {
        let store = MemoryStore::new();
        let id = store
            .insert(ResourceKind::Article, fields(json!({"title": "Why reusable?"})))
            .await
            .unwrap();

        let documents = store.query(ResourceKind::Article, None).await.unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0][INTERNAL_ID], json!(id));
        assert_eq!(documents[0]["title"], json!("Why reusable?"));
    }

    #[tokio::test]
    async fn test_query_preserves_insertion_order() {
        let store = MemoryStore::new();
        for name in ["first", "second", "third"] {
            store
                .insert(ResourceKind::Product, fields(json!({"name": name})))
                .await
                .unwrap();
        }

        let documents = store.query(ResourceKind::Product, None).await.unwrap();
        let names: Vec<&str> = documents
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_query_with_filter_narrows() {
        let store = MemoryStore::new();
        store
            .insert(
                ResourceKind::ImpactEntry,
                fields(json!({"user_id": "u-1", "date": "2025-01-15"})),
            )
            .await
            .unwrap();
        store
            .insert(
                ResourceKind::ImpactEntry,
                fields(json!({"user_id": "u-2", "date": "2025-01-16"})),
            )
            .await
            .unwrap();
        store
            .insert(ResourceKind::ImpactEntry, fields(json!({"date": "2025-01-17"})))
            .await
            .unwrap();

        let filter = ExactMatch::new("user_id", "u-1");
        let documents = store
            .query(ResourceKind::ImpactEntry, Some(&filter))
            .await
            .unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["user_id"], json!("u-1"));
    }

    #[tokio::test]
    async fn test_query_untouched_kind_is_empty() {
        let store = MemoryStore::new();
        let documents = store.query(ResourceKind::User, None).await.unwrap();
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let store = MemoryStore::new();
        store
            .insert(ResourceKind::Product, fields(json!({"name": "Luna Cup"})))
            .await
            .unwrap();

        assert!(store.query(ResourceKind::Article, None).await.unwrap().is_empty());
        assert_eq!(store.query(ResourceKind::Product, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_diagnostics_reports_memory_backend() {
        let store = MemoryStore::new();
        store
            .insert(ResourceKind::Product, fields(json!({"name": "Luna Cup"})))
            .await
            .unwrap();
        store
            .insert(ResourceKind::Article, fields(json!({"title": "Guide"})))
            .await
            .unwrap();

        let snapshot = store.diagnostics().await;
        assert_eq!(snapshot.backend, "memory");
        assert!(snapshot.connected);
        assert_eq!(snapshot.database, None);
        assert_eq!(snapshot.collections, vec!["article", "product"]);
        assert_eq!(snapshot.error, None);
    }
}
