//! Response schema validation for generated REST API clients.
//!
//! Every HTTP response handed back by a generated operation can be
//! checked against the JSON Schema registered for that operation's
//! resource and API version, with the result attached to the returned
//! value instead of being silently discarded. Two schema dialects are
//! recognized (an older draft-3-style convention and a newer
//! draft-4-style one); validation is structural and tolerant of null
//! fields.
//!
//! # Core Components
//!
//! - [`ResponseValidator`] - runs the validation pipeline for a completed response
//! - [`SchemaRegistry`] - operation-to-schema registry built at client construction
//! - [`ValidationPolicy`] - attach the outcome, or raise on invalid
//! - [`SchemaValidation`] - deferred, memoized outcome attached to each response
//!
//! Responses whose declared content type is not JSON-family and
//! operations with no registered schema are fail-open: their outcomes are
//! valid but flagged as unchecked, and they never raise under either
//! policy.
//!
//! # Quick Start
//!
//! ```rust
//! use response_validation::{OperationId, RawResponse, ResponseValidator, SchemaRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = SchemaRegistry::new();
//! let get_movies = OperationId::new("movies", "v1");
//! registry.register_json(
//!     get_movies.clone(),
//!     r#"{
//!         "$schema": "http://json-schema.org/draft-04/schema#",
//!         "type": "object",
//!         "properties": { "name": { "type": "string" } },
//!         "required": ["name"]
//!     }"#,
//! )?;
//!
//! let validator = ResponseValidator::new(registry);
//! let response = RawResponse::json(200, r#"{ "name": "Big Fish" }"#);
//! let validation = validator.validate(&get_movies, &response)?;
//! assert!(validation.outcome().is_valid());
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod content;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod response;
pub mod schema;
pub mod validator;

// Re-export commonly used types for convenience
pub use container::{SchemaValidation, ValidatedResponse};
pub use content::{classify, ContentClass};
pub use error::{PolicyViolationError, RegistryError, ResponseError};
pub use outcome::{
    OutcomeClass, PathSegment, ValidationOutcome, ValidationViolation, ViolationKind,
    ViolationPath,
};
pub use policy::ValidationPolicy;
pub use response::RawResponse;
pub use schema::{Dialect, OperationId, SchemaDocument, SchemaRegistry};
pub use validator::ResponseValidator;
