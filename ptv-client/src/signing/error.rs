//! Signing error types.

/// Errors producing a signed request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningError {
    /// The canonical request is not valid UTF-8
    #[error("canonical request is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The configured base URL does not parse
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The key was rejected by the MAC implementation.
    ///
    /// HMAC takes keys of any length, so this only covers the fallible
    /// `new_from_slice` signature.
    #[error("invalid signing key")]
    InvalidKey,
}
