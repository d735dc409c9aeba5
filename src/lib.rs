//! reluna - catalog, content, and impact-tracking API backed by a
//! document store

pub mod cli;
pub mod gateway;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
