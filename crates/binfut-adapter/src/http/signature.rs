/*
[INPUT]:  Canonical query string and HMAC secret key
[OUTPUT]: Lowercase hex signature parameter
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or digest rendering
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{AdapterError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs canonical query strings for authenticated endpoints.
///
/// Holds the only copy of the API secret; the secret is used as HMAC key
/// material and is never transmitted or printed.
pub struct RequestSigner {
    secret: Vec<u8>,
}

impl RequestSigner {
    /// Create a new signer from the API secret.
    ///
    /// An empty secret is a configuration error, reported at construction
    /// rather than at call time.
    pub fn new(api_secret: &str) -> Result<Self> {
        if api_secret.is_empty() {
            return Err(AdapterError::Config(
                "API secret must not be empty".to_string(),
            ));
        }
        Ok(Self {
            secret: api_secret.as_bytes().to_vec(),
        })
    }

    /// Compute the HMAC-SHA256 signature over the canonical query string.
    ///
    /// Returns a 64-character lowercase hex digest. Deterministic for a
    /// fixed secret and input.
    pub fn sign(&self, canonical_query: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length");
        mac.update(canonical_query.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
