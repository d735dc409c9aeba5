//! Resource gateway
//!
//! One gateway per resource kind sits between the HTTP surface and the
//! document store. Writes are validated against the kind's schema
//! before they touch the store; reads come back in client shape, with
//! the store-native identifier renamed to `id`.

mod errors;
mod resource;
mod serialize;

pub use errors::GatewayError;
pub use resource::ResourceGateway;
pub use serialize::{to_client_document, CLIENT_ID};
