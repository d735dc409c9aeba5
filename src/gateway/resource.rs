//! Per-kind gateway over the document store

use std::sync::Arc;

use serde_json::Value;

use crate::gateway::errors::GatewayError;
use crate::gateway::serialize::to_client_document;
use crate::schema::{validate_document, ResourceKind, SchemaRegistry};
use crate::store::{DocumentStore, ExactMatch};

/// Gateway for one resource kind.
///
/// Owns the kind's write path (validate, then persist) and read path
/// (fetch, then rewrite to client shape). Handlers never talk to the
/// store directly.
#[derive(Debug)]
pub struct ResourceGateway<S> {
    kind: ResourceKind,
    registry: Arc<SchemaRegistry>,
    store: Arc<S>,
}

impl<S> Clone for ResourceGateway<S> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            registry: Arc::clone(&self.registry),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> ResourceGateway<S> {
    /// Create a gateway for `kind` backed by `store`.
    pub fn new(kind: ResourceKind, registry: Arc<SchemaRegistry>, store: Arc<S>) -> Self {
        Self {
            kind,
            registry,
            store,
        }
    }

    /// The kind this gateway serves.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Validate `input` and persist the normalized record.
    ///
    /// Returns the new identifier. Nothing is written when validation
    /// fails.
    pub async fn create(&self, input: &Value) -> Result<String, GatewayError> {
        let record = validate_document(self.registry.schema(self.kind), input)
            .map_err(GatewayError::Validation)?;

        let id = self.store.insert(self.kind, record.into_fields()).await?;
        Ok(id)
    }

    /// Fetch every document of this kind in client shape, optionally
    /// narrowed by an exact-match filter.
    pub async fn list(&self, filter: Option<&ExactMatch>) -> Result<Vec<Value>, GatewayError> {
        let documents = self.store.query(self.kind, filter).await?;
        Ok(documents.into_iter().map(to_client_document).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::serialize::CLIENT_ID;
    use crate::store::{MemoryStore, INTERNAL_ID};
    use serde_json::json;

    fn gateway(kind: ResourceKind) -> ResourceGateway<MemoryStore> {
        ResourceGateway::new(
            kind,
            Arc::new(SchemaRegistry::new()),
            Arc::new(MemoryStore::new()),
        )
    }

    #[tokio::test]
    async fn test_create_returns_identifier() {
        let gateway = gateway(ResourceKind::Product);
        let id = gateway
            .create(&json!({"name": "Luna Cup", "type": "cup", "price": 29.99}))
            .await
            .unwrap();
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_without_writing() {
        let gateway = gateway(ResourceKind::Product);
        let result = gateway.create(&json!({"name": "Luna Cup"})).await;

        match result {
            Err(GatewayError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["type", "price"]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }

        assert!(gateway.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_client_shape() {
        let gateway = gateway(ResourceKind::Product);
        let id = gateway
            .create(&json!({"name": "Luna Cup", "type": "cup", "price": 29.99}))
            .await
            .unwrap();

        let documents = gateway.list(None).await.unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0][CLIENT_ID], json!(id));
        assert!(documents[0].get(INTERNAL_ID).is_none());
        // normalization applied before persisting
        assert_eq!(documents[0]["in_stock"], json!(true));
        assert_eq!(documents[0]["materials"], json!([]));
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let gateway = gateway(ResourceKind::Article);
        for title in ["first", "second", "third"] {
            gateway
                .create(&json!({"title": title, "content": "..."}))
                .await
                .unwrap();
        }

        let titles: Vec<String> = gateway
            .list(None)
            .await
            .unwrap()
            .iter()
            .map(|d| d["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let gateway = gateway(ResourceKind::ImpactEntry);
        gateway
            .create(&json!({"user_id": "u-1", "date": "2025-01-15"}))
            .await
            .unwrap();
        gateway
            .create(&json!({"user_id": "u-2", "date": "2025-01-16"}))
            .await
            .unwrap();

        let filter = ExactMatch::new("user_id", "u-1");
        let documents = gateway.list(Some(&filter)).await.unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["user_id"], json!("u-1"));
    }

    #[tokio::test]
    async fn test_gateways_share_one_store() {
        let registry = Arc::new(SchemaRegistry::new());
        let store = Arc::new(MemoryStore::new());
        let products =
            ResourceGateway::new(ResourceKind::Product, Arc::clone(&registry), Arc::clone(&store));
        let articles =
            ResourceGateway::new(ResourceKind::Article, Arc::clone(&registry), Arc::clone(&store));

        products
            .create(&json!({"name": "Luna Cup", "type": "cup", "price": 29.99}))
            .await
            .unwrap();

        assert!(articles.list(None).await.unwrap().is_empty());
        assert_eq!(store.count(ResourceKind::Product), 1);
    }
}
