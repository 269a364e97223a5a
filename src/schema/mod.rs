//! Schema documents, dialect detection, and the operation registry.
//!
//! A schema document arrives from the generator as raw JSON, is parsed
//! once into a dialect-tagged structural shape, and is then shared
//! read-only by every validation of the operation it belongs to.
//!
//! # Key Types
//!
//! - [`SchemaDocument`] - parsed, dialect-tagged schema with a structural shape
//! - [`SchemaRegistry`] - operation-to-schema registry built at client construction
//! - [`OperationId`] - resource + API version lookup key

mod dialect;
pub mod registry;
pub mod types;
mod validation;


// Re-export the main types for convenience
pub use registry::{OperationId, SchemaRegistry};
pub use types::{
    Dialect, JsonType, ObjectShape, PropertyDefinition, SchemaDocument, SchemaShape, ValueFormat,
};
