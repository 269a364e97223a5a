//! Operation-keyed schema registry.
//!
//! Maps each generated operation (resource + API version) to its parsed
//! schema document. The registry is assembled at client construction from
//! the generator's output and is read-only afterwards, so many in-flight
//! requests can resolve schemas concurrently without synchronization.

use super::types::SchemaDocument;
use crate::error::{RegistryError, RegistryResult};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier of one addressable action on a generated API client,
/// scoped to an API version. Each operation has at most one schema per
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId {
    resource: String,
    version: String,
}

impl OperationId {
    /// Create an operation identifier from a resource name and API version.
    pub fn new(resource: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            version: version.into(),
        }
    }

    /// The resource the operation addresses.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The API version the operation belongs to.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.resource, self.version)
    }
}

/// Registry of schema documents keyed by operation.
///
/// An operation without a registered schema is not an error; validation
/// for such operations yields a fail-open valid outcome.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<OperationId, Arc<SchemaDocument>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parsed schema document for an operation.
    pub fn register(&mut self, operation: OperationId, document: SchemaDocument) {
        self.schemas.insert(operation, Arc::new(document));
    }

    /// Register a schema delivered as a raw JSON value. Total: documents
    /// with no recognizable dialect still register and validate
    /// best-effort.
    pub fn register_value(&mut self, operation: OperationId, raw: &Value) {
        self.register(operation, SchemaDocument::from_value(raw));
    }

    /// Register a schema delivered as JSON text, as the generator emits
    /// it. Text that does not parse as JSON is a registration error.
    pub fn register_json(&mut self, operation: OperationId, text: &str) -> RegistryResult<()> {
        let document =
            SchemaDocument::parse(text).map_err(|source| RegistryError::MalformedSchema {
                operation: operation.to_string(),
                source,
            })?;
        self.register(operation, document);
        Ok(())
    }

    /// Resolve the schema for an operation. `None` means no schema was
    /// registered, which the pipeline treats as "validation not
    /// applicable".
    pub fn resolve(&self, operation: &OperationId) -> Option<Arc<SchemaDocument>> {
        self.schemas.get(operation).cloned()
    }

    /// Whether a schema is registered for an operation.
    pub fn contains(&self, operation: &OperationId) -> bool {
        self.schemas.contains_key(operation)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
