//! Content classification for response bodies.
//!
//! Decides whether a response's declared media type is JSON-shaped and
//! therefore eligible for schema validation. A response that is not
//! JSON-family is never treated as a schema violation.

/// Whether a response body is eligible for schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    /// The declared media type is JSON-family
    Eligible,
    /// Not JSON-family (or no content type at all); validation is skipped
    NotApplicable,
}

impl ContentClass {
    /// Whether the rest of the validation pipeline should run.
    pub fn is_eligible(&self) -> bool {
        matches!(self, ContentClass::Eligible)
    }
}

/// Classify a declared content type.
///
/// Eligible when the media type, with parameters stripped and compared
/// case-insensitively, has the subtype `json` or a `+json` structured
/// syntax suffix (`application/json`, `text/json`,
/// `application/hal+json; charset=utf-8`, ...). An absent, empty, or
/// malformed content type classifies as not applicable rather than
/// failing.
pub fn classify(declared: Option<&str>) -> ContentClass {
    let Some(raw) = declared else {
        return ContentClass::NotApplicable;
    };

    let media_type = raw.split(';').next().unwrap_or("").trim();
    let Some((kind, subtype)) = media_type.split_once('/') else {
        return ContentClass::NotApplicable;
    };
    if kind.trim().is_empty() {
        return ContentClass::NotApplicable;
    }

    let subtype = subtype.trim().to_ascii_lowercase();
    if subtype == "json" || subtype.ends_with("+json") {
        ContentClass::Eligible
    } else {
        ContentClass::NotApplicable
    }
}
