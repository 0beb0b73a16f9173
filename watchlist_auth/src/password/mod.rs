mod config;
mod errors;
mod hasher;
mod salt;
mod types;

pub use config::{PASSWORD_HASH_ALGORITHM_ENV, PASSWORD_HASH_ITERATIONS_ENV, PasswordAlgorithm};
pub use errors::PasswordError;
pub use hasher::PasswordHasher;
pub use salt::{SaltSource, SystemSaltSource};
pub use types::PasswordRecord;
