//! PTV client error types.

use crate::api::ProjectionError;
use crate::signing::SigningError;
use crate::transport::TransportError;

/// Errors from the PTV client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response not read
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request could not be signed
    #[error("signing failed: {0}")]
    Signing(#[from] SigningError),

    /// Strict call received a non-200 status
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body is not valid JSON
    #[error("JSON parse error: {message}")]
    Decode { message: String, body: String },

    /// The JSON did not match the resource's expected structure
    #[error("invalid response: {0}")]
    Projection(#[from] ProjectionError),
}

impl ApiError {
    /// The HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
