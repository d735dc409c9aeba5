//! Impact tracker HTTP routes
//!
//! Endpoints for per-user impact entries. Listing accepts an optional
//! `user_id` query parameter; an empty value means no filter, matching
//! the surface this API replaces.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::catalog_routes::CreatedResponse;
use super::errors::ApiResult;
use super::state::ApiState;
use crate::store::{DocumentStore, ExactMatch};

// ==================
// Request Types
// ==================

/// Query parameters for listing impact entries.
#[derive(Debug, Deserialize)]
pub struct ImpactListQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ImpactListQuery {
    /// The filter to apply, if any. Empty strings count as absent.
    fn filter(&self) -> Option<ExactMatch> {
        self.user_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| ExactMatch::new("user_id", v))
    }
}

// ==================
// Routes
// ==================

/// Create impact tracker routes
pub fn impact_routes<S: DocumentStore + 'static>(state: Arc<ApiState<S>>) -> Router {
    Router::new()
        .route("/impact", get(list_impact_handler::<S>))
        .route("/impact", post(create_impact_handler::<S>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_impact_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
    Query(params): Query<ImpactListQuery>,
) -> ApiResult<Json<Vec<Value>>> {
    let filter = params.filter();
    let documents = state.impact.list(filter.as_ref()).await?;
    Ok(Json(documents))
}

async fn create_impact_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = state.impact.create(&body).await?;
    Ok(Json(CreatedResponse { id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_user_id_means_no_filter() {
        let params = ImpactListQuery { user_id: None };
        assert_eq!(params.filter(), None);
    }

    #[test]
    fn test_empty_user_id_means_no_filter() {
        let params = ImpactListQuery {
            user_id: Some(String::new()),
        };
        assert_eq!(params.filter(), None);
    }

    #[test]
    fn test_user_id_builds_exact_match() {
        let params = ImpactListQuery {
            user_id: Some("u-123".to_string()),
        };
        assert_eq!(params.filter(), Some(ExactMatch::new("user_id", "u-123")));
    }
}
