//! Error types

mod api;
mod build;

pub use api::*;
pub use build::*;

/// Top-level error returned by the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query tree could not be serialized.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The request could not be delivered or the service rejected it.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns the HTTP status code if the service answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status_code(),
            Self::Build(_) => None,
        }
    }

    /// Returns the raw response body if the service answered with an error status.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Api(e) => e.body(),
            Self::Build(_) => None,
        }
    }
}
