//! Shared fixtures for the integration test suite.
//!
//! The two schema documents mirror the contracts a generated client would
//! register at construction: a legacy (draft-3-style) movie listing and a
//! modern (draft-4-style) component/version document.

use response_validation::{OperationId, ResponseValidator, SchemaRegistry, ValidationPolicy};

pub const MOVIES_SCHEMA: &str = r#"{
    "type": "array",
    "items": {
        "type": "object",
        "properties": {
            "id": { "type": "integer", "required": true },
            "name": { "type": "string", "required": true },
            "director": { "type": "string", "required": true },
            "genre": { "type": "string" },
            "cast": { "type": "string" },
            "duration": { "type": "number" },
            "storyline": { "type": "string" },
            "language": { "type": "string" },
            "rented": { "type": "boolean" }
        }
    }
}"#;

pub const VERSION_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-04/schema#",
    "type": "object",
    "properties": {
        "Component": { "type": "string" },
        "Version": { "type": "string" }
    },
    "required": ["Component", "Version"]
}"#;

/// A complete, valid movie listing body.
pub const MOVIE_LISTING: &str = r#"[{
    "id": 1,
    "name": "Big Fish",
    "director": "Tim Burton",
    "genre": "Drama, Fantasy",
    "cast": "Ewan McGregor, Albert Finney, Billy Crudup",
    "duration": 90,
    "storyline": "none",
    "language": "English",
    "rented": false
}]"#;

/// The same listing with nullable business fields explicitly null.
pub const MOVIE_LISTING_WITH_NULLS: &str = r#"[{
    "id": 1,
    "name": "Big Fish",
    "director": "Tim Burton",
    "genre": null,
    "cast": "Ewan McGregor, Albert Finney, Billy Crudup",
    "duration": null,
    "storyline": "none",
    "language": "English",
    "rented": false
}]"#;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn get_movies() -> OperationId {
    OperationId::new("movies", "v1")
}

pub fn get_version() -> OperationId {
    OperationId::new("version", "v1")
}

pub fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .register_json(get_movies(), MOVIES_SCHEMA)
        .expect("movies schema parses");
    registry
        .register_json(get_version(), VERSION_SCHEMA)
        .expect("version schema parses");
    registry
}

pub fn validator(policy: ValidationPolicy) -> ResponseValidator {
    init_logging();
    ResponseValidator::new(registry()).with_policy(policy)
}
