use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Stored record is not of the form `hash,salt`
    #[error("Malformed password record: {0}")]
    MalformedRecord(String),

    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<UtilError> for PasswordError {
    fn from(err: UtilError) -> Self {
        PasswordError::Crypto(err.to_string())
    }
}
