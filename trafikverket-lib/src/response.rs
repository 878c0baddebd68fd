//! Raw service response

use std::borrow::Cow;

/// A successful answer from the service.
///
/// The body is kept as raw bytes; the service normally sends JSON, but
/// decoding it is left to the caller.
///
/// # Example
///
/// ```ignore
/// let response = client.execute(query)?;
///
/// let json: serde_json::Value = serde_json::from_slice(response.body())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    /// Creates a new response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Consumes the response and returns the body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
