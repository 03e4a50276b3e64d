//! HTTP transport.
//!
//! The client only needs a blocking GET that hands back the status code
//! and raw body; decoding is done by the caller. [`HttpTransport`] is the
//! reqwest-backed implementation, [`MockTransport`] serves canned
//! responses for tests and offline use.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

/// Errors from the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single GET request.
pub trait Transport {
    /// Fetch `url`, returning the status and body whatever the status.
    fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        (**self).get(url)
    }
}
