//! Signed URL construction.

use url::{Position, Url};

use crate::config::{ClientConfig, Credentials};

use super::error::SigningError;
use super::query::Query;
use super::signer::Signer;

/// API version segment prefixed to every path.
pub const API_VERSION: &str = "v3";

/// Query parameter carrying the developer ID.
const DEVID_PARAM: &str = "devid";

/// Query parameter carrying the signature.
const SIGNATURE_PARAM: &str = "signature";

/// Builds fully qualified, signed request URLs.
///
/// The produced format is
/// `<base>/v3/<path>?<params>&devid=<id>&signature=<HEX>`. The signature
/// covers everything from `/v3` up to and including the `devid`
/// parameter. The path is percent-encoded the way an HTTP client will
/// send it, so the signed text and the requested text are the same.
/// Building never performs I/O, and the same query always yields the
/// same URL.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: Url,
    devid: String,
    signer: Signer,
}

impl UrlBuilder {
    /// Create a builder for the given credentials and config.
    pub fn new(credentials: &Credentials, config: &ClientConfig) -> Result<Self, SigningError> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            devid: credentials.identifier().to_string(),
            signer: Signer::new(credentials.secret())?,
        })
    }

    /// The string the signature is computed over.
    ///
    /// Existing parameters keep their order; `devid` is appended last.
    /// Path characters outside the URL path set are percent-encoded and
    /// existing `%XX` escapes are left alone.
    pub fn canonical_request(&self, query: &Query) -> String {
        let url = self.unsigned_url(query);
        url[Position::BeforePath..].to_string()
    }

    /// Build the signed URL for a query.
    pub fn build(&self, query: &Query) -> Result<String, SigningError> {
        let url = self.unsigned_url(query);
        let signature = self.signer.sign(url[Position::BeforePath..].as_bytes())?;
        Ok(format!("{url}&{SIGNATURE_PARAM}={signature}"))
    }

    fn unsigned_url(&self, query: &Query) -> Url {
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}/{API_VERSION}{}", query.path()));
        let params = query.encode_params([(DEVID_PARAM, self.devid.as_str())]);
        url.set_query(Some(&params));
        url
    }
}

/// Build a signed URL against the production API.
///
/// # Examples
///
/// ```
/// use ptv_client::config::Credentials;
/// use ptv_client::signing::{Query, build_url};
///
/// let credentials = Credentials::new("1234567", "s3cret");
/// let url = build_url(&Query::parse("/route_types"), &credentials).unwrap();
/// assert!(url.starts_with(
///     "https://timetableapi.ptv.vic.gov.au/v3/route_types?devid=1234567&signature="
/// ));
/// ```
pub fn build_url(query: &Query, credentials: &Credentials) -> Result<String, SigningError> {
    UrlBuilder::new(credentials, &ClientConfig::new())?.build(query)
}
