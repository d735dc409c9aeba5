//! HTTP surface for the catalog, content, and impact API
//!
//! An axum server exposing the resource endpoints under `/api`,
//! a liveness probe at `/`, and store diagnostics at `/test`.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness probe
//! - `GET /test` - Store and configuration diagnostics
//! - `GET|POST /api/products` - Product catalog
//! - `GET|POST /api/articles` - Educational articles
//! - `GET|POST /api/impact` - Impact tracker (list filters by `user_id`)

pub mod catalog_routes;
pub mod config;
pub mod diagnostics_routes;
pub mod errors;
pub mod impact_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
pub use state::ApiState;
