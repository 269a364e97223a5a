//! The result container attached to every deserialized response.
//!
//! Validation is computed at most once per response and only on first
//! access, unless the policy forces eager evaluation. The memoization is
//! an explicit one-shot cell rather than implicit laziness so the
//! compute-at-most-once contract is auditable.

use crate::outcome::{ValidationOutcome, ValidationViolation, ViolationKind};
use crate::schema::SchemaDocument;
use log::debug;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

/// Deferred, memoized validation outcome for a single response.
///
/// Cloning shares the underlying cell, so a clone handed to another task
/// observes the same outcome and never re-triggers the work. Safe to read
/// from whatever concurrency context the surrounding response handling
/// uses.
#[derive(Debug, Clone)]
pub struct SchemaValidation {
    inner: Arc<ValidationCell>,
}

#[derive(Debug)]
struct ValidationCell {
    computed: OnceLock<ValidationOutcome>,
    source: ValidationSource,
}

#[derive(Debug)]
enum ValidationSource {
    /// Outcome known up front (fail-open skips)
    Settled(ValidationOutcome),
    /// Inputs held until the outcome is first requested
    Deferred {
        document: Arc<SchemaDocument>,
        body: String,
    },
}

impl SchemaValidation {
    /// A validation whose outcome is already known.
    pub(crate) fn settled(outcome: ValidationOutcome) -> Self {
        Self {
            inner: Arc::new(ValidationCell {
                computed: OnceLock::new(),
                source: ValidationSource::Settled(outcome),
            }),
        }
    }

    /// A validation that parses and checks the body on first access.
    pub(crate) fn deferred(document: Arc<SchemaDocument>, body: String) -> Self {
        Self {
            inner: Arc::new(ValidationCell {
                computed: OnceLock::new(),
                source: ValidationSource::Deferred { document, body },
            }),
        }
    }

    /// The validation outcome for this response.
    ///
    /// First access computes; later accesses return the memoized value.
    pub fn outcome(&self) -> &ValidationOutcome {
        self.inner.computed.get_or_init(|| match &self.inner.source {
            ValidationSource::Settled(outcome) => outcome.clone(),
            ValidationSource::Deferred { document, body } => evaluate(document, body),
        })
    }

    /// Shorthand for `outcome().is_valid()`.
    pub fn is_valid(&self) -> bool {
        self.outcome().is_valid()
    }
}

/// Parse and check a response body. A body that does not parse as JSON
/// despite its JSON-family content type is a validation failure, not a
/// transport error.
fn evaluate(document: &SchemaDocument, body: &str) -> ValidationOutcome {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => document.validate(&value),
        Err(err) => {
            debug!("response body is not parseable JSON: {err}");
            ValidationOutcome::verified(vec![ValidationViolation::at_root(
                ViolationKind::MalformedBody {
                    detail: err.to_string(),
                },
            )])
        }
    }
}

/// A deserialized response body together with its validation outcome.
///
/// Created when a response is received and destroyed with the response
/// value; the outcome has no independent lifetime.
#[derive(Debug, Clone)]
pub struct ValidatedResponse<T> {
    value: T,
    validation: SchemaValidation,
}

impl<T> ValidatedResponse<T> {
    /// Pair a deserialized value with its validation handle.
    pub fn new(value: T, validation: SchemaValidation) -> Self {
        Self { value, validation }
    }

    /// The deserialized response body.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The validation handle for this response.
    pub fn validation(&self) -> &SchemaValidation {
        &self.validation
    }

    /// Consume the wrapper, keeping the body.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume the wrapper into its parts.
    pub fn into_parts(self) -> (T, SchemaValidation) {
        (self.value, self.validation)
    }
}
