//! The inbound response surface delivered by the transport.
//!
//! The engine does not perform content negotiation or retries; it consumes
//! whatever completed response the transport hands over.

/// A completed HTTP response as delivered by the transport: status code,
/// declared content type, and the already-decoded body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl RawResponse {
    /// Create a response with no declared content type.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// Create an `application/json` response.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, body).with_content_type("application/json")
    }

    /// Set the declared content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The declared content type, if the transport reported one.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The decoded body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}
