//! Catalog and content HTTP routes
//!
//! Endpoints for the product catalog and educational articles.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use super::errors::ApiResult;
use super::state::ApiState;
use crate::store::DocumentStore;

// ==================
// Response Types
// ==================

/// Body returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

// ==================
// Routes
// ==================

/// Create catalog routes
pub fn catalog_routes<S: DocumentStore + 'static>(state: Arc<ApiState<S>>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler::<S>))
        .route("/products", post(create_product_handler::<S>))
        .route("/articles", get(list_articles_handler::<S>))
        .route("/articles", post(create_article_handler::<S>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_products_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
) -> ApiResult<Json<Vec<Value>>> {
    let documents = state.products.list(None).await?;
    Ok(Json(documents))
}

async fn create_product_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = state.products.create(&body).await?;
    Ok(Json(CreatedResponse { id }))
}

async fn list_articles_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
) -> ApiResult<Json<Vec<Value>>> {
    let documents = state.articles.list(None).await?;
    Ok(Json(documents))
}

async fn create_article_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = state.articles.create(&body).await?;
    Ok(Json(CreatedResponse { id }))
}
