use crate::core::errors::CustodyError;
use base64::engine::general_purpose;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer as _};
use rsa::RsaPrivateKey;
use sha2::Sha512;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "open-apikey";
/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "signature";

/// Signer trait for request authentication.
///
/// The payload is the canonical string of the request: the query string for
/// GET calls, the JSON body bytes for POST calls. Signing must be
/// deterministic: the service recomputes the signature over the same bytes
/// and compares.
pub trait Signer: Send + Sync {
    /// Sign the canonical payload, returning the `signature` header value.
    fn sign(&self, payload: &[u8]) -> String;

    /// Headers attached to every authenticated call.
    fn signed_headers(&self, payload: &[u8]) -> Vec<(&'static str, String)>;
}

/// RSA signer for the custody Open API.
///
/// Signature scheme: SHA-512 digest, PKCS#1 v1.5 padding, base64-encoded
/// signature bytes. Key material is the base64 of a PKCS#1 DER private key
/// (PKCS#8 DER is accepted too, as both encodings circulate).
pub struct RsaSigner {
    api_key: String,
    signing_key: SigningKey<Sha512>,
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl RsaSigner {
    /// Parse the key material and build a signer.
    ///
    /// Any key problem surfaces here, at construction, never at sign time.
    pub fn new(api_key: impl Into<String>, private_key_b64: &str) -> Result<Self, CustodyError> {
        let der = general_purpose::STANDARD
            .decode(private_key_b64.trim())
            .map_err(|e| CustodyError::InvalidKey(format!("invalid base64 key material: {}", e)))?;

        let private_key = match RsaPrivateKey::from_pkcs1_der(&der) {
            Ok(key) => key,
            Err(pkcs1_err) => RsaPrivateKey::from_pkcs8_der(&der).map_err(|pkcs8_err| {
                CustodyError::InvalidKey(format!(
                    "unable to parse RSA private key: {} / {}",
                    pkcs1_err, pkcs8_err
                ))
            })?,
        };

        Ok(Self {
            api_key: api_key.into(),
            signing_key: SigningKey::new(private_key),
        })
    }
}

impl Signer for RsaSigner {
    fn sign(&self, payload: &[u8]) -> String {
        // PKCS#1 v1.5 is deterministic: same payload, same signature.
        let signature = self.signing_key.sign(payload);
        general_purpose::STANDARD.encode(signature.to_bytes())
    }

    fn signed_headers(&self, payload: &[u8]) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_string()),
            (API_KEY_HEADER, self.api_key.clone()),
            (SIGNATURE_HEADER, self.sign(payload)),
        ]
    }
}
