//! Dialect detection and per-dialect schema parsing.
//!
//! A raw schema document is inspected once for its dialect markers and
//! parsed into the normalized [`SchemaShape`] representation; validation
//! later dispatches on the resulting tag instead of re-inspecting raw
//! JSON. Detection is deterministic and total over any document the
//! registry can hold.
//!
//! Marker rules:
//! - a `$schema` URI containing `draft-03` is legacy; any other declared
//!   `$schema` is modern
//! - without `$schema`, a root-level `required` array is modern
//! - without `$schema`, per-property boolean `required` markers are legacy
//! - anything else is unknown and validated best-effort

use super::types::{
    Dialect, JsonType, ObjectShape, PropertyDefinition, SchemaDocument, SchemaShape, ValueFormat,
};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub(super) fn parse_document(raw: &Value) -> SchemaDocument {
    let dialect = detect(raw);
    let root = parse_shape(raw, dialect);
    SchemaDocument::new(dialect, root)
}

fn detect(raw: &Value) -> Dialect {
    let Some(root) = raw.as_object() else {
        return Dialect::Unknown;
    };

    if let Some(marker) = root.get("$schema").and_then(Value::as_str) {
        return if marker.contains("draft-03") {
            Dialect::Legacy
        } else {
            Dialect::Modern
        };
    }

    if root.get("required").is_some_and(Value::is_array) {
        return Dialect::Modern;
    }

    if has_boolean_required_markers(root) {
        return Dialect::Legacy;
    }

    Dialect::Unknown
}

/// Draft-3 marks requiredness with `required: true/false` on each
/// property. Look for such markers at the root and under an array root's
/// item schema.
fn has_boolean_required_markers(root: &Map<String, Value>) -> bool {
    if properties_carry_boolean_required(root) {
        return true;
    }
    root.get("items")
        .and_then(Value::as_object)
        .is_some_and(properties_carry_boolean_required)
}

fn properties_carry_boolean_required(node: &Map<String, Value>) -> bool {
    node.get("properties")
        .and_then(Value::as_object)
        .is_some_and(|props| {
            props
                .values()
                .any(|prop| prop.get("required").is_some_and(Value::is_boolean))
        })
}

fn parse_shape(raw: &Value, dialect: Dialect) -> SchemaShape {
    let Some(node) = raw.as_object() else {
        return SchemaShape::any();
    };

    match node.get("type").and_then(Value::as_str) {
        Some("array") => SchemaShape::Array(Box::new(item_shape(node, dialect))),
        Some("object") => SchemaShape::Object(parse_object(node, dialect)),
        Some(keyword) => SchemaShape::Scalar {
            expected: JsonType::from_keyword(keyword),
            format: parse_format(node),
        },
        // No usable type keyword (absent, or a union array): fall back to
        // the structural markers that are present.
        None => {
            if node.contains_key("properties") {
                SchemaShape::Object(parse_object(node, dialect))
            } else if node.contains_key("items") {
                SchemaShape::Array(Box::new(item_shape(node, dialect)))
            } else {
                SchemaShape::any()
            }
        }
    }
}

fn item_shape(node: &Map<String, Value>, dialect: Dialect) -> SchemaShape {
    match node.get("items") {
        Some(items) => parse_shape(items, dialect),
        None => SchemaShape::any(),
    }
}

fn parse_object(node: &Map<String, Value>, dialect: Dialect) -> ObjectShape {
    let required_names = modern_required_names(node);

    let mut properties = Vec::new();
    if let Some(props) = node.get("properties").and_then(Value::as_object) {
        for (name, prop) in props {
            let required = match dialect {
                Dialect::Legacy => prop
                    .get("required")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                Dialect::Modern => required_names.contains(name.as_str()),
                Dialect::Unknown => false,
            };
            properties.push(PropertyDefinition {
                name: name.clone(),
                required,
                shape: parse_shape(prop, dialect),
            });
        }
    }

    ObjectShape { properties }
}

/// Draft-4 requiredness: a `required` array of property names on the
/// enclosing object node.
fn modern_required_names(node: &Map<String, Value>) -> HashSet<&str> {
    node.get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn parse_format(node: &Map<String, Value>) -> Option<ValueFormat> {
    node.get("format")
        .and_then(Value::as_str)
        .and_then(ValueFormat::from_keyword)
}
