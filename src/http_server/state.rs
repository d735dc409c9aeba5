//! Shared router state
//!
//! One gateway per served resource kind, all over the same injected
//! store. Handlers are generic over the store implementation, so the
//! test suite can drive the real router against a `MemoryStore`.

use std::sync::Arc;

use crate::gateway::ResourceGateway;
use crate::schema::{ResourceKind, SchemaRegistry};
use crate::store::DocumentStore;

/// State shared by every API handler.
#[derive(Debug)]
pub struct ApiState<S> {
    /// Gateway for the product catalog
    pub products: ResourceGateway<S>,
    /// Gateway for educational articles
    pub articles: ResourceGateway<S>,
    /// Gateway for impact tracking entries
    pub impact: ResourceGateway<S>,
    store: Arc<S>,
}

impl<S: DocumentStore> ApiState<S> {
    /// Build the state over `store`, wiring one gateway per kind.
    pub fn new(store: Arc<S>) -> Self {
        let registry = Arc::new(SchemaRegistry::new());
        Self {
            products: ResourceGateway::new(
                ResourceKind::Product,
                Arc::clone(&registry),
                Arc::clone(&store),
            ),
            articles: ResourceGateway::new(
                ResourceKind::Article,
                Arc::clone(&registry),
                Arc::clone(&store),
            ),
            impact: ResourceGateway::new(
                ResourceKind::ImpactEntry,
                Arc::clone(&registry),
                Arc::clone(&store),
            ),
            store,
        }
    }

    /// The underlying store, for diagnostics.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_gateways_cover_served_kinds() {
        let state = ApiState::new(Arc::new(MemoryStore::new()));
        assert_eq!(state.products.kind(), ResourceKind::Product);
        assert_eq!(state.articles.kind(), ResourceKind::Article);
        assert_eq!(state.impact.kind(), ResourceKind::ImpactEntry);
    }
}
