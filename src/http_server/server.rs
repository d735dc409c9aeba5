//! HTTP server assembly
//!
//! Combines the route groups into one router behind a permissive CORS
//! layer and binds it to the configured address.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::catalog_routes::catalog_routes;
use super::config::HttpServerConfig;
use super::diagnostics_routes::diagnostics_routes;
use super::impact_routes::impact_routes;
use super::state::ApiState;
use crate::store::DocumentStore;

/// Build the complete router over `state`.
///
/// Liveness and diagnostics sit at the root; resource routes are
/// nested under `/api`. Cross-origin requests are allowed from any
/// origin with any method and headers.
pub fn build_router<S: DocumentStore + 'static>(state: Arc<ApiState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(diagnostics_routes(Arc::clone(&state)))
        .nest(
            "/api",
            catalog_routes(Arc::clone(&state)).merge(impact_routes(state)),
        )
        .layer(cors)
}

/// HTTP server for the catalog, content, and impact API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `state` with the given configuration.
    pub fn new<S: DocumentStore + 'static>(
        config: HttpServerConfig,
        state: Arc<ApiState<S>>,
    ) -> Self {
        let router = build_router(state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(address = %addr, "API server listening");
        axum::serve(listener, self.router).await
    }
}
