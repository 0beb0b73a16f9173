//! Process-wide signing secret
//!
//! The secret is loaded once at startup and handed to every component that
//! computes a keyed digest. It is never persisted and never rotated while the
//! process runs; restarting with a new value revokes every issued session.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Environment variable holding the signing secret
pub const AUTH_SERVER_SECRET_ENV: &str = "AUTH_SERVER_SECRET";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecretError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("Signing secret must not be empty")]
    Empty,
}

/// Immutable key for the session cookie signature.
#[derive(Clone)]
pub struct ServerSecret {
    bytes: Arc<[u8]>,
}

impl ServerSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretError> {
        let bytes: Vec<u8> = bytes.into();
        if bytes.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self {
            bytes: Arc::from(bytes),
        })
    }

    /// Load the secret from `AUTH_SERVER_SECRET`.
    ///
    /// There is no fallback value: a process without a secret cannot trust any
    /// session, so callers should refuse to start on error.
    pub fn from_env() -> Result<Self, SecretError> {
        let value = std::env::var(AUTH_SERVER_SECRET_ENV)
            .map_err(|_| SecretError::Missing(AUTH_SERVER_SECRET_ENV.to_string()))?;
        Self::new(value.into_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for ServerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSecret")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
