//! Liveness and diagnostics HTTP routes
//!
//! `/` answers a liveness probe; `/test` describes the store backend
//! and configuration. Both return 200 regardless of store health and
//! degrade their payload instead of failing.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::state::ApiState;
use crate::store::{DocumentStore, StoreConfig, StoreDiagnostics};

// ==================
// Response Types
// ==================

/// Liveness response served at the root path.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// Whether the store settings are present in the environment.
#[derive(Debug, Serialize)]
pub struct ConfigPresence {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl ConfigPresence {
    fn from_env() -> Self {
        let config = StoreConfig::from_env();
        Self {
            database_url_set: config.url.is_some(),
            database_name_set: config.database.is_some(),
        }
    }
}

/// Full diagnostics payload served at `/test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub status: &'static str,
    pub store: StoreDiagnostics,
    pub config: ConfigPresence,
}

// ==================
// Routes
// ==================

/// Create liveness and diagnostics routes
pub fn diagnostics_routes<S: DocumentStore + 'static>(state: Arc<ApiState<S>>) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/test", get(diagnostics_handler::<S>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "reluna API is running".to_string(),
    })
}

async fn diagnostics_handler<S: DocumentStore>(
    State(state): State<Arc<ApiState<S>>>,
) -> Json<DiagnosticsResponse> {
    let store = state.store().diagnostics().await;
    Json(DiagnosticsResponse {
        status: "running",
        store,
        config: ConfigPresence::from_env(),
    })
}
