//! Error types for the response validation engine.
//!
//! Fail-open conditions (no schema registered, non-JSON content type) are
//! not errors and never appear here; they are enumerated outcome classes
//! on [`ValidationOutcome`]. Errors are reserved for the raise-on-invalid
//! policy, malformed schema documents at registration time, and the typed
//! deserialization convenience path.

use crate::outcome::{ValidationOutcome, ValidationViolation};

/// Raised in place of the normal return value when the client policy is
/// raise-on-invalid and the response body fails schema validation.
///
/// Carries the full [`ValidationOutcome`], so the violation list a caller
/// would have inspected under attach-only policy is available on the
/// error as well.
#[derive(Debug, Clone, thiserror::Error)]
#[error("response body failed schema validation with {} violation(s)", violation_count(.outcome))]
pub struct PolicyViolationError {
    outcome: ValidationOutcome,
}

fn violation_count(outcome: &ValidationOutcome) -> usize {
    outcome.violations().len()
}

impl PolicyViolationError {
    pub(crate) fn new(outcome: ValidationOutcome) -> Self {
        Self { outcome }
    }

    /// The outcome that triggered the error.
    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// The violations found, in the order they were emitted.
    pub fn violations(&self) -> &[ValidationViolation] {
        self.outcome.violations()
    }

    /// Consume the error, keeping the outcome.
    pub fn into_outcome(self) -> ValidationOutcome {
        self.outcome
    }
}

/// Errors when populating a [`crate::SchemaRegistry`] at client
/// construction time.
///
/// These are programming/generation errors and should be caught during
/// development rather than at request time.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Schema text handed over by the generator is not valid JSON
    #[error("schema for operation '{operation}' is not valid JSON: {source}")]
    MalformedSchema {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors on the typed convenience path that validates and then
/// deserializes a response body.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The raise-on-invalid policy rejected the response
    #[error(transparent)]
    Policy(#[from] PolicyViolationError),

    /// The body could not be deserialized into the requested type
    #[error("response body could not be deserialized: {0}")]
    Body(#[from] serde_json::Error),
}

// Result type aliases for convenience
pub type PolicyResult<T> = Result<T, PolicyViolationError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type ResponseResult<T> = Result<T, ResponseError>;
