use ring::rand::SystemRandom;

use super::errors::PasswordError;
use crate::utils::gen_random_string_with;

/// Random bytes per generated salt; base64url turns 12 bytes into 16 characters
const SALT_BYTES: usize = 12;

/// Source of fresh per-user salts.
pub trait SaltSource: Send + Sync {
    fn generate_salt(&self) -> Result<String, PasswordError>;
}

/// Salts drawn from the operating system CSPRNG.
#[derive(Debug, Clone)]
pub struct SystemSaltSource {
    rng: SystemRandom,
}

impl SystemSaltSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemSaltSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SaltSource for SystemSaltSource {
    fn generate_salt(&self) -> Result<String, PasswordError> {
        Ok(gen_random_string_with(&self.rng, SALT_BYTES)?)
    }
}
