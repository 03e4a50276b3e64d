//! reqwest-backed transport.

use std::time::Duration;

use tracing::trace;

use crate::config::ClientConfig;

use super::{RawResponse, Transport, TransportError};

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ptv-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        trace!(status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}
