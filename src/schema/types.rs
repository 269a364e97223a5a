//! Core schema type definitions.
//!
//! This module contains the parsed, immutable representation of a JSON
//! Schema document: the dialect tag, the recursive structural shape, and
//! the per-property constraints the validation walker checks against.

use serde::Serialize;
use serde_json::Value;

/// The structural convention a schema document follows.
///
/// Two dialects are recognized; anything else is classified as
/// [`Dialect::Unknown`] and validated best-effort instead of being
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dialect {
    /// Older draft-3-style documents with per-property `required` booleans
    Legacy,
    /// Newer draft-4-style documents with a root-level `required` array
    Modern,
    /// No recognizable dialect markers; type checks only
    Unknown,
}

impl Dialect {
    /// Lowercase name for log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Legacy => "legacy",
            Dialect::Modern => "modern",
            Dialect::Unknown => "unknown",
        }
    }
}

/// Declared JSON types a property constraint can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    /// No type constraint
    Any,
}

impl JsonType {
    /// Map a schema `type` keyword to a constraint. Unrecognized keywords
    /// (including union arrays, which arrive here as no keyword at all)
    /// become [`JsonType::Any`] rather than an error.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "string" => JsonType::String,
            "number" => JsonType::Number,
            "integer" => JsonType::Integer,
            "boolean" => JsonType::Boolean,
            "object" => JsonType::Object,
            "array" => JsonType::Array,
            _ => JsonType::Any,
        }
    }

    /// Keyword name for violation messages.
    pub fn name(&self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Any => "any",
        }
    }

    /// Whether a runtime JSON value satisfies this type constraint.
    /// `number` accepts any JSON number; `integer` requires an integral one.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            JsonType::String => value.is_string(),
            JsonType::Number => value.is_number(),
            JsonType::Integer => value.is_i64() || value.is_u64(),
            JsonType::Boolean => value.is_boolean(),
            JsonType::Object => value.is_object(),
            JsonType::Array => value.is_array(),
            JsonType::Any => true,
        }
    }
}

/// Get the runtime type name of a JSON value for violation messages.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// String format constraints the walker knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    /// RFC 3339 date-time
    DateTime,
}

impl ValueFormat {
    /// Map a schema `format` keyword to a known format. Unrecognized
    /// formats are not checked.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "date-time" => Some(ValueFormat::DateTime),
            _ => None,
        }
    }
}

/// Definition of one declared object property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDefinition {
    /// Property name as it appears in the body
    pub name: String,
    /// Whether absence of the property is a violation
    pub required: bool,
    /// The shape the property's value must satisfy
    pub shape: SchemaShape,
}

/// Declared properties of an object schema, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectShape {
    pub properties: Vec<PropertyDefinition>,
}

impl ObjectShape {
    /// Look up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// The recursive structural shape of a schema node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SchemaShape {
    /// An object with declared properties
    Object(ObjectShape),
    /// An array whose elements satisfy the item shape
    Array(Box<SchemaShape>),
    /// A scalar with an optional type and format constraint
    Scalar {
        expected: JsonType,
        format: Option<ValueFormat>,
    },
}

impl SchemaShape {
    /// A shape that accepts any value.
    pub fn any() -> Self {
        SchemaShape::Scalar {
            expected: JsonType::Any,
            format: None,
        }
    }
}

/// An immutable parsed JSON Schema document.
///
/// Parsed once (dialect detection included) when registered, then shared
/// read-only by all concurrent validations of the same operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    dialect: Dialect,
    root: SchemaShape,
}

impl SchemaDocument {
    pub(crate) fn new(dialect: Dialect, root: SchemaShape) -> Self {
        Self { dialect, root }
    }

    /// Parse a raw schema document. Total: unrecognized structures come
    /// back as [`Dialect::Unknown`] rather than an error.
    pub fn from_value(raw: &Value) -> Self {
        super::dialect::parse_document(raw)
    }

    /// Parse a schema document from JSON text.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_value(&serde_json::from_str(text)?))
    }

    /// The detected dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The root shape.
    pub fn root(&self) -> &SchemaShape {
        &self.root
    }
}
