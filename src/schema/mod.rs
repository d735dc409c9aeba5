//! Schema registry and document validation
//!
//! Every write is validated against the fixed schema for its resource
//! kind before it reaches the store. Validation never mutates its input;
//! it produces a normalized copy with defaults filled and unknown keys
//! dropped. Built-in schemas are immutable for the life of the process.

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationReason};
pub use registry::SchemaRegistry;
pub use types::{FieldSpec, FieldType, NumericRange, ResourceKind, ResourceSchema};
pub use validator::{validate_document, NormalizedRecord};
