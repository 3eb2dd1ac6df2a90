//! Matching service errors.

use thiserror::Error;

/// Errors that can occur when talking to the matching service.
#[derive(Debug, Error)]
pub enum FaceMatcherError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx response or unexpected body.
    #[error("unexpected response from matching service: {0}")]
    UnexpectedResponse(String),
}
