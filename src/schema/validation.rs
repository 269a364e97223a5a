//! Structural validation of response bodies against schema documents.
//!
//! The walker checks a parsed JSON value against the normalized shape,
//! accumulating every violation it finds instead of stopping at the
//! first, so a single pass reports all mismatches with their paths.

use super::types::{value_type_name, Dialect, SchemaDocument, SchemaShape, ValueFormat};
use crate::outcome::{ValidationOutcome, ValidationViolation, ViolationKind, ViolationPath};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Whether `required` markers are enforced during a walk.
///
/// Documents with no recognizable dialect cannot be trusted for presence
/// semantics, so they are checked for type mismatches only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequiredHandling {
    Enforce,
    Ignore,
}

impl SchemaDocument {
    /// Validate a parsed response body against this document.
    ///
    /// Dispatches on the dialect tag: the two recognized dialects get
    /// full structural validation, unknown documents get best-effort
    /// type checking.
    pub fn validate(&self, body: &Value) -> ValidationOutcome {
        let handling = match self.dialect() {
            Dialect::Legacy | Dialect::Modern => RequiredHandling::Enforce,
            Dialect::Unknown => RequiredHandling::Ignore,
        };

        let mut violations = Vec::new();
        check_shape(
            self.root(),
            body,
            &ViolationPath::root(),
            handling,
            &mut violations,
        );
        ValidationOutcome::verified(violations)
    }
}

fn check_shape(
    shape: &SchemaShape,
    value: &Value,
    path: &ViolationPath,
    handling: RequiredHandling,
    out: &mut Vec<ValidationViolation>,
) {
    // An explicit null satisfies any declared shape. This tolerates
    // optional/nullable business fields without nullable annotations in
    // the schema, and extends the same tolerance to the body root.
    if value.is_null() {
        return;
    }

    match shape {
        SchemaShape::Scalar { expected, format } => {
            if !expected.matches(value) {
                out.push(ValidationViolation::new(
                    path.clone(),
                    ViolationKind::TypeMismatch {
                        expected: expected.name().to_string(),
                        actual: value_type_name(value).to_string(),
                    },
                ));
            } else if let (Some(ValueFormat::DateTime), Some(text)) = (format, value.as_str()) {
                if !is_rfc3339_datetime(text) {
                    out.push(ValidationViolation::new(
                        path.clone(),
                        ViolationKind::InvalidDateTime {
                            value: text.to_string(),
                        },
                    ));
                }
            }
        }
        SchemaShape::Array(item) => match value {
            Value::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    check_shape(item, element, &path.with_index(index), handling, out);
                }
            }
            // A collection endpoint may hand back a bare object; check it
            // against the item schema rather than rejecting the container
            // shape outright.
            Value::Object(_) => check_shape(item, value, path, handling, out),
            other => out.push(ValidationViolation::new(
                path.clone(),
                ViolationKind::ExpectedArray {
                    actual: value_type_name(other).to_string(),
                },
            )),
        },
        SchemaShape::Object(object) => match value.as_object() {
            None => out.push(ValidationViolation::new(
                path.clone(),
                ViolationKind::ExpectedObject {
                    actual: value_type_name(value).to_string(),
                },
            )),
            Some(fields) => {
                // Declared properties are checked; properties present in
                // the data but not declared are ignored. The schema is a
                // floor, not an allow-list.
                for property in &object.properties {
                    match fields.get(&property.name) {
                        None => {
                            if property.required && handling == RequiredHandling::Enforce {
                                out.push(ValidationViolation::new(
                                    path.clone(),
                                    ViolationKind::MissingRequiredProperty {
                                        property: property.name.clone(),
                                    },
                                ));
                            }
                        }
                        Some(field) => check_shape(
                            &property.shape,
                            field,
                            &path.with_property(&property.name),
                            handling,
                            out,
                        ),
                    }
                }
            }
        },
    }
}

/// Validate date-time strings with chrono's RFC 3339 parser, which gives
/// full semantic validation (no Feb 30th) and proper timezone handling.
fn is_rfc3339_datetime(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    DateTime::<FixedOffset>::parse_from_rfc3339(value).is_ok()
}
