//! Pipeline orchestration for response validation.
//!
//! Runs the full pipeline for each completed response: content
//! classification gates the work, the registry supplies the schema, and
//! the policy decides whether the outcome is attached lazily or forced
//! and raised. Validation itself is synchronous CPU-only work with no
//! I/O; it is meant to be invoked from the asynchronous continuation
//! that runs after a response body has been received.

use crate::container::{SchemaValidation, ValidatedResponse};
use crate::content::{classify, ContentClass};
use crate::error::{PolicyResult, ResponseResult};
use crate::outcome::ValidationOutcome;
use crate::policy::ValidationPolicy;
use crate::response::RawResponse;
use crate::schema::{OperationId, SchemaRegistry};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The schema validation engine for one client instance.
///
/// Holds the read-only schema registry and the client's validation
/// policy. Configure both before issuing requests; changing the policy
/// concurrently with in-flight requests is a caller responsibility the
/// `&mut self` setter already rules out for shared instances.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    registry: Arc<SchemaRegistry>,
    policy: ValidationPolicy,
}

impl ResponseValidator {
    /// Create a validator over a populated registry with the default
    /// attach-only policy.
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            policy: ValidationPolicy::default(),
        }
    }

    /// Set the policy, builder style.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the policy on an existing validator.
    pub fn set_policy(&mut self, policy: ValidationPolicy) {
        self.policy = policy;
    }

    /// The policy in effect.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// The schema registry in use.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Run the validation pipeline for one completed response.
    ///
    /// Non-JSON content types and unregistered operations yield settled
    /// fail-open outcomes and never raise, regardless of policy. Under
    /// attach-only policy the returned handle defers the actual check
    /// until first access; under raise-on-invalid the check runs now and
    /// an invalid body becomes a [`crate::PolicyViolationError`].
    pub fn validate(
        &self,
        operation: &OperationId,
        response: &RawResponse,
    ) -> PolicyResult<SchemaValidation> {
        trace!(
            "validating response for operation '{operation}' (status {}, {} bytes)",
            response.status(),
            response.body().len()
        );

        if classify(response.content_type()) == ContentClass::NotApplicable {
            debug!(
                "operation '{operation}': content type {:?} is not JSON-family, skipping validation",
                response.content_type()
            );
            return Ok(SchemaValidation::settled(
                ValidationOutcome::not_json_content(),
            ));
        }

        let Some(document) = self.registry.resolve(operation) else {
            debug!("operation '{operation}': no schema registered, skipping validation");
            return Ok(SchemaValidation::settled(
                ValidationOutcome::schema_unavailable(),
            ));
        };

        trace!(
            "operation '{operation}': resolved {} dialect schema",
            document.dialect().name()
        );
        let validation = SchemaValidation::deferred(document, response.body().to_owned());

        if self.policy.raises_on_invalid() {
            // The error must surface before the value would reach the
            // caller, so evaluation cannot stay deferred under this
            // policy.
            let outcome = validation.outcome().clone();
            if !outcome.is_valid() {
                debug!(
                    "operation '{operation}': body invalid with {} violation(s)",
                    outcome.violations().len()
                );
            }
            self.policy.finalize(outcome)?;
        }

        Ok(validation)
    }

    /// Validate, then deserialize the body into `T`.
    ///
    /// Convenience for JSON endpoints whose callers want the typed value
    /// and the outcome in one step. The body must parse into `T` even
    /// when validation was skipped fail-open, so this is not suitable for
    /// endpoints that may legitimately return non-JSON payloads.
    pub fn accept<T>(
        &self,
        operation: &OperationId,
        response: &RawResponse,
    ) -> ResponseResult<ValidatedResponse<T>>
    where
        T: DeserializeOwned,
    {
        let validation = self.validate(operation, response)?;
        let value = serde_json::from_str(response.body())?;
        Ok(ValidatedResponse::new(value, validation))
    }
}
