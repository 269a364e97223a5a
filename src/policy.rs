//! Per-client validation policy.

use crate::error::PolicyViolationError;
use crate::outcome::ValidationOutcome;

/// What happens to an invalid validation outcome.
///
/// Set by the client owner before requests are issued and read-only during
/// validation. Whether a violation becomes an error is decided entirely
/// here, never by the nature of the violation itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Attach the outcome to the response wrapper and return normally
    /// regardless of validity. Evaluation may be deferred until the
    /// caller first inspects the outcome.
    #[default]
    AttachOnly,
    /// Raise a [`PolicyViolationError`] instead of returning the value
    /// when the outcome is invalid. Forces eager evaluation.
    RaiseOnInvalid,
}

impl ValidationPolicy {
    /// Whether this policy turns invalid outcomes into errors.
    pub fn raises_on_invalid(&self) -> bool {
        matches!(self, ValidationPolicy::RaiseOnInvalid)
    }

    /// Apply the policy to a computed outcome.
    ///
    /// Fail-open outcomes carry no violations, so they pass through under
    /// either policy.
    pub fn finalize(
        &self,
        outcome: ValidationOutcome,
    ) -> Result<ValidationOutcome, PolicyViolationError> {
        match self {
            ValidationPolicy::AttachOnly => Ok(outcome),
            ValidationPolicy::RaiseOnInvalid => {
                if outcome.is_valid() {
                    Ok(outcome)
                } else {
                    Err(PolicyViolationError::new(outcome))
                }
            }
        }
    }
}
