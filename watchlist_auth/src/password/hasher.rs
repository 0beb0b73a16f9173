use std::sync::Arc;

use ring::pbkdf2;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::config::PasswordAlgorithm;
use super::errors::PasswordError;
use super::salt::{SaltSource, SystemSaltSource};
use super::types::{PasswordRecord, RECORD_SEPARATOR};
use crate::utils::base64url_encode;

const PBKDF2_OUTPUT_LEN: usize = 32;

/// Derives and verifies salted password records.
///
/// Stateless apart from its configuration, so one instance can be shared by
/// every request handler.
#[derive(Clone)]
pub struct PasswordHasher {
    algorithm: PasswordAlgorithm,
    salt_source: Arc<dyn SaltSource>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(PasswordAlgorithm::default(), Arc::new(SystemSaltSource::new()))
    }
}

impl PasswordHasher {
    pub fn new(algorithm: PasswordAlgorithm, salt_source: Arc<dyn SaltSource>) -> Self {
        Self {
            algorithm,
            salt_source,
        }
    }

    pub fn algorithm(&self) -> PasswordAlgorithm {
        self.algorithm
    }

    /// Hash `username ++ password` with `salt`, or with a fresh salt when none
    /// is given, and return the stored form `hash,salt`.
    pub fn hash_password(
        &self,
        username: &str,
        password: &str,
        salt: Option<&str>,
    ) -> Result<String, PasswordError> {
        let salt = match salt {
            Some(salt) if salt.contains(RECORD_SEPARATOR) => {
                return Err(PasswordError::InvalidSalt(format!(
                    "salt must not contain '{RECORD_SEPARATOR}'"
                )));
            }
            Some(salt) => salt.to_string(),
            None => self.salt_source.generate_salt()?,
        };

        let record = PasswordRecord {
            hash: self.digest(username, password, &salt),
            salt,
        };
        Ok(record.to_string())
    }

    /// Check `password` against a stored `hash,salt` record.
    ///
    /// A malformed record counts as a failed verification.
    pub fn verify_password(&self, username: &str, password: &str, stored: &str) -> bool {
        let record: PasswordRecord = match stored.parse() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(%username, error = %e, "Rejecting password check against malformed record");
                return false;
            }
        };

        let candidate = self.digest(username, password, &record.salt);
        candidate.as_bytes().ct_eq(record.hash.as_bytes()).into()
    }

    fn digest(&self, username: &str, password: &str, salt: &str) -> String {
        match self.algorithm {
            PasswordAlgorithm::Pbkdf2Sha256 { iterations } => {
                let mut out = [0u8; PBKDF2_OUTPUT_LEN];
                let input = [username.as_bytes(), password.as_bytes()].concat();
                pbkdf2::derive(
                    pbkdf2::PBKDF2_HMAC_SHA256,
                    iterations,
                    salt.as_bytes(),
                    &input,
                    &mut out,
                );
                base64url_encode(out)
            }
            PasswordAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(username.as_bytes());
                hasher.update(password.as_bytes());
                hasher.update(salt.as_bytes());
                hex::encode(hasher.finalize())
            }
        }
    }
}
