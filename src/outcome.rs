//! Validation outcome types attached to deserialized responses.
//!
//! This module contains the structured result of validating one response
//! body against one schema document: individual violations with their
//! location inside the body, and the aggregate outcome a caller inspects
//! through [`crate::SchemaValidation`].

use serde::Serialize;
use std::fmt;

/// One step in the location of a violation within a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathSegment {
    /// Descent into an object property
    Property(String),
    /// Descent into an array element
    Index(usize),
}

/// Location of a violation within a response body, from the root down.
///
/// Rendered in the conventional `$.property[index]` notation, with `$`
/// denoting the body root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationPath {
    segments: Vec<PathSegment>,
}

impl ViolationPath {
    /// The body root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A copy of this path extended by one object property.
    pub fn with_property(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Property(name.to_string()));
        Self { segments }
    }

    /// A copy of this path extended by one array index.
    pub fn with_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// The segments from the root down.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether this path points at the body root itself.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ViolationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Property(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// The reason a single violation was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// A property the schema marks required is absent
    #[error("missing required property: {property}")]
    MissingRequiredProperty { property: String },

    /// The runtime JSON type does not match the declared type
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The schema declares an object but the value is something else
    #[error("expected a JSON object, got {actual}")]
    ExpectedObject { actual: String },

    /// The schema declares an array but the value is something else
    #[error("expected a JSON array, got {actual}")]
    ExpectedArray { actual: String },

    /// The declared content type is JSON-family but the body does not parse
    #[error("response body is not parseable JSON: {detail}")]
    MalformedBody { detail: String },

    /// A string carrying a date-time format constraint does not parse as RFC 3339
    #[error("invalid date-time value: {value}")]
    InvalidDateTime { value: String },
}

/// One structural mismatch between a response body and its schema.
///
/// Immutable; created only by the validation walker (or, for unparseable
/// bodies, by the deferred evaluation in [`crate::SchemaValidation`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationViolation {
    path: ViolationPath,
    kind: ViolationKind,
}

impl ValidationViolation {
    /// Create a violation at a specific location.
    pub fn new(path: ViolationPath, kind: ViolationKind) -> Self {
        Self { path, kind }
    }

    /// Create a violation located at the body root.
    pub fn at_root(kind: ViolationKind) -> Self {
        Self::new(ViolationPath::root(), kind)
    }

    /// Where in the body the mismatch was found.
    pub fn path(&self) -> &ViolationPath {
        &self.path
    }

    /// Why the mismatch was emitted.
    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }

    /// Human-readable reason without the location prefix.
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// How an outcome came to be.
///
/// Fail-open cases are kept as distinct classes so a caller can tell
/// "verified valid" apart from "not checked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeClass {
    /// The body was checked against a registered schema
    Verified,
    /// No schema is registered for the operation; nothing was checked
    SchemaUnavailable,
    /// The declared content type is not JSON-family; nothing was checked
    NotJsonContent,
}

/// Aggregate result of validating one response body.
///
/// Immutable once produced. The outcome is valid exactly when the
/// violation list is empty; the [`OutcomeClass`] records whether that
/// emptiness came from an actual check or from a fail-open branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    class: OutcomeClass,
    violations: Vec<ValidationViolation>,
}

impl ValidationOutcome {
    /// An outcome produced by actually checking a body against a schema.
    pub fn verified(violations: Vec<ValidationViolation>) -> Self {
        Self {
            class: OutcomeClass::Verified,
            violations,
        }
    }

    /// The fail-open outcome for operations with no registered schema.
    pub fn schema_unavailable() -> Self {
        Self {
            class: OutcomeClass::SchemaUnavailable,
            violations: Vec::new(),
        }
    }

    /// The fail-open outcome for non-JSON declared content types.
    pub fn not_json_content() -> Self {
        Self {
            class: OutcomeClass::NotJsonContent,
            violations: Vec::new(),
        }
    }

    /// How this outcome came to be.
    pub fn class(&self) -> OutcomeClass {
        self.class
    }

    /// Whether the body passed (or was never subject to) validation.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether a schema check actually ran, as opposed to a fail-open skip.
    pub fn was_checked(&self) -> bool {
        matches!(self.class, OutcomeClass::Verified)
    }

    /// The violations found, in the order they were emitted.
    pub fn violations(&self) -> &[ValidationViolation] {
        &self.violations
    }
}
