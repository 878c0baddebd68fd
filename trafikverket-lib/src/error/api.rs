//! API error types

/// Errors that can occur while dispatching a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-200 status.
    ///
    /// The body is kept as-is since the service reports its diagnostics there.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The request failed below the HTTP layer (connect, DNS, TLS, reading the body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid endpoint URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this is an HTTP error.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the request never got an HTTP answer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
