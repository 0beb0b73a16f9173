use std::num::NonZeroU32;

use super::errors::PasswordError;

pub const PASSWORD_HASH_ALGORITHM_ENV: &str = "PASSWORD_HASH_ALGORITHM";
pub const PASSWORD_HASH_ITERATIONS_ENV: &str = "PASSWORD_HASH_ITERATIONS";

const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Digest used to derive the stored password hash.
///
/// Records carry no algorithm tag, so every record in a store must be
/// verified with the algorithm it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordAlgorithm {
    /// PBKDF2-HMAC-SHA256 over `username ++ password`, base64url output.
    Pbkdf2Sha256 { iterations: NonZeroU32 },
    /// Lowercase hex SHA-256 of `username ++ password ++ salt`.
    ///
    /// Matches records written by the earlier version of the application.
    Sha256,
}

impl Default for PasswordAlgorithm {
    fn default() -> Self {
        Self::Pbkdf2Sha256 {
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_PBKDF2_ITERATIONS).unwrap_or(NonZeroU32::MIN)
}

impl PasswordAlgorithm {
    /// Build from `PASSWORD_HASH_ALGORITHM` and `PASSWORD_HASH_ITERATIONS`.
    pub fn from_env() -> Result<Self, PasswordError> {
        Self::parse(
            std::env::var(PASSWORD_HASH_ALGORITHM_ENV).ok().as_deref(),
            std::env::var(PASSWORD_HASH_ITERATIONS_ENV).ok().as_deref(),
        )
    }

    pub(crate) fn parse(
        algorithm: Option<&str>,
        iterations: Option<&str>,
    ) -> Result<Self, PasswordError> {
        match algorithm.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("pbkdf2-sha256") => {
                let parsed = iterations
                    .and_then(|s| s.trim().parse::<u32>().ok())
                    .and_then(NonZeroU32::new)
                    .unwrap_or_else(|| {
                        if let Some(raw) = iterations {
                            tracing::warn!(
                                "Ignoring invalid {}={:?}, using default",
                                PASSWORD_HASH_ITERATIONS_ENV,
                                raw
                            );
                        }
                        default_iterations()
                    });
                Ok(Self::Pbkdf2Sha256 { iterations: parsed })
            }
            Some("sha256") => Ok(Self::Sha256),
            Some(other) => Err(PasswordError::Config(format!(
                "Unsupported password hash algorithm: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_pbkdf2() {
        let algorithm = PasswordAlgorithm::parse(None, None).expect("default algorithm");
        assert_eq!(algorithm, PasswordAlgorithm::default());
        assert_eq!(
            algorithm,
            PasswordAlgorithm::Pbkdf2Sha256 {
                iterations: NonZeroU32::new(100_000).unwrap()
            }
        );
    }

    #[test]
    fn test_parse_custom_iterations() {
        let algorithm =
            PasswordAlgorithm::parse(Some("PBKDF2-SHA256"), Some("5000")).expect("valid config");
        assert_eq!(
            algorithm,
            PasswordAlgorithm::Pbkdf2Sha256 {
                iterations: NonZeroU32::new(5000).unwrap()
            }
        );
    }

    #[test]
    fn test_parse_invalid_iterations_fall_back() {
        for raw in ["0", "-1", "many"] {
            let algorithm =
                PasswordAlgorithm::parse(Some("pbkdf2-sha256"), Some(raw)).expect("falls back");
            assert_eq!(algorithm, PasswordAlgorithm::default());
        }
    }

    #[test]
    fn test_parse_legacy_sha256() {
        let algorithm = PasswordAlgorithm::parse(Some("sha256"), Some("5000")).expect("valid");
        assert_eq!(algorithm, PasswordAlgorithm::Sha256);
    }

    #[test]
    fn test_parse_unknown_algorithm() {
        let err = PasswordAlgorithm::parse(Some("md5"), None).unwrap_err();
        assert!(matches!(err, PasswordError::Config(_)));
    }
}
