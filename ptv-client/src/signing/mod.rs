//! Request signing for the PTV Timetable API.
//!
//! Every request must carry the caller's developer ID (`devid`) and an
//! HMAC-SHA1 signature of the versioned path and query string, keyed with
//! the developer key. The signature must be the last query parameter.

mod error;
mod query;
mod request;
mod signer;

pub use error::SigningError;
pub use query::Query;
pub use request::{API_VERSION, UrlBuilder, build_url};
pub use signer::Signer;
