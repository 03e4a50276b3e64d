//! Mock transport for testing without API access.
//!
//! Serves canned responses keyed by request path and records every URL it
//! is asked for, so tests can assert on exactly what was requested.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use url::Url;

use crate::signing::API_VERSION;

use super::{RawResponse, Transport, TransportError};

/// Body returned for paths with no canned response.
const NOT_FOUND_BODY: &str = r#"{"message":"The requested resource was not found.","status":{"version":"3.0","health":1}}"#;

/// Transport that answers from an in-memory table.
///
/// Paths are registered without the version prefix (e.g. `/route_types`);
/// unknown paths get a 404 with a JSON error body, like the real API.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: HashMap<String, RawResponse>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `path`.
    pub fn with_json(self, path: &str, body: &str) -> Self {
        self.with_response(path, RawResponse::new(200, body))
    }

    /// Serve an arbitrary response for `path`.
    pub fn with_response(mut self, path: &str, response: RawResponse) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently requested URL, parsed.
    pub fn last_request(&self) -> Option<Url> {
        self.requests().last().and_then(|url| Url::parse(url).ok())
    }

    fn unversioned_path(url: &Url) -> &str {
        let path = url.path();
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(API_VERSION))
            .filter(|rest| rest.starts_with('/'))
            .unwrap_or(path)
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        let response = Url::parse(url)
            .ok()
            .and_then(|parsed| self.responses.get(Self::unversioned_path(&parsed)).cloned())
            .unwrap_or_else(|| RawResponse::new(404, NOT_FOUND_BODY));

        Ok(response)
    }
}
