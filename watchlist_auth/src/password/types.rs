use std::fmt;
use std::str::FromStr;

use super::errors::PasswordError;

pub(super) const RECORD_SEPARATOR: char = ',';

/// A stored password hash together with the salt it was derived with.
///
/// The stored form is `hash,salt`. The salt is not secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecord {
    pub hash: String,
    pub salt: String,
}

impl FromStr for PasswordRecord {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(RECORD_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(hash), Some(salt), None) if !hash.is_empty() => Ok(Self {
                hash: hash.to_string(),
                salt: salt.to_string(),
            }),
            (_, None, _) => Err(PasswordError::MalformedRecord(
                "missing separator".to_string(),
            )),
            (_, _, Some(_)) => Err(PasswordError::MalformedRecord(
                "too many separators".to_string(),
            )),
            _ => Err(PasswordError::MalformedRecord("empty hash".to_string())),
        }
    }
}

impl fmt::Display for PasswordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.hash, RECORD_SEPARATOR, self.salt)
    }
}
