//! HMAC-SHA1 request signer.

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::error::SigningError;

type HmacSha1 = Hmac<Sha1>;

/// Computes request signatures with the developer key.
///
/// The signature is HMAC-SHA1 over the canonical request path, rendered
/// as uppercase hex. The keyed state is prepared once and cloned for each
/// signature, so a `Signer` can be shared freely.
#[derive(Clone)]
pub struct Signer {
    mac: HmacSha1,
}

impl Signer {
    /// Create a signer keyed with `secret`.
    pub fn new(secret: &[u8]) -> Result<Self, SigningError> {
        let mac = HmacSha1::new_from_slice(secret).map_err(|_| SigningError::InvalidKey)?;
        Ok(Self { mac })
    }

    /// Sign a canonical request path.
    ///
    /// The input must be valid UTF-8.
    ///
    /// ```
    /// use ptv_client::signing::Signer;
    ///
    /// let signer = Signer::new(b"s3cret").unwrap();
    /// let signature = signer.sign(b"/v3/healthcheck?devid=1234567").unwrap();
    /// assert_eq!(signature.len(), 40);
    /// assert!(signature.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    /// ```
    pub fn sign(&self, canonical: &[u8]) -> Result<String, SigningError> {
        std::str::from_utf8(canonical)?;
        let mut mac = self.mac.clone();
        mac.update(canonical);
        Ok(hex::encode_upper(mac.finalize().into_bytes()))
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Signer([REDACTED])")
    }
}
