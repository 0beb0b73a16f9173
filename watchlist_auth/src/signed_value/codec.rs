//! Tamper-evident encoding of string payloads
//!
//! A signed value is `payload|base64url(HMAC-SHA256(secret, payload))`.
//! Anyone can read the payload; only a holder of the secret can produce a
//! signature that verifies.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::types::SignedValue;
use crate::secret::ServerSecret;
use crate::utils::base64url_encode;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct SignedValueCodec {
    // Keyed once; cloned per signature so the secret is read a single time
    mac: HmacSha256,
}

impl std::fmt::Debug for SignedValueCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedValueCodec").finish_non_exhaustive()
    }
}

impl SignedValueCodec {
    pub fn new(secret: &ServerSecret) -> Self {
        let mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
        Self { mac }
    }

    fn signature(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        base64url_encode(mac.finalize().into_bytes())
    }

    /// Sign `payload`, returning `payload|signature`.
    pub fn make_signed_value(&self, payload: &str) -> String {
        SignedValue {
            payload: payload.to_string(),
            signature: self.signature(payload),
        }
        .to_string()
    }

    /// Whether the signature of `value` matches its payload under this secret.
    pub fn verify(&self, value: &SignedValue) -> bool {
        let expected = self.signature(&value.payload);
        expected.as_bytes().ct_eq(value.signature.as_bytes()).into()
    }

    /// Return the payload of a signed string if, and only if, it verifies.
    ///
    /// A missing separator, an empty payload or a bad signature all yield
    /// `None`; callers treat that as "no identity".
    pub fn check_signed_value(&self, signed: &str) -> Option<String> {
        let value = SignedValue::parse(signed)?;
        if value.payload.is_empty() {
            return None;
        }
        if !self.verify(&value) {
            tracing::debug!("Signature mismatch for signed value");
            return None;
        }
        Some(value.payload)
    }
}
