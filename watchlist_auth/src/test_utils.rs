//! Shared helpers for unit tests across the crate

use std::num::NonZeroU32;
use std::sync::Arc;

use http::HeaderMap;
use http::header::SET_COOKIE;

use crate::coordination::AuthService;
use crate::password::{PasswordAlgorithm, PasswordHasher, SystemSaltSource};
use crate::secret::ServerSecret;
use crate::session::{GateConfig, SessionGate};
use crate::signed_value::SignedValueCodec;
use crate::userdb::UserStore;

pub(crate) const TEST_SECRET: &str = "test-server-secret";

/// Service with a cheap key derivation so tests stay fast
pub(crate) fn test_service(store: Arc<dyn UserStore>) -> AuthService {
    let secret = ServerSecret::new(TEST_SECRET).expect("non-empty secret");
    let hasher = PasswordHasher::new(
        PasswordAlgorithm::Pbkdf2Sha256 {
            iterations: NonZeroU32::new(1000).expect("non-zero"),
        },
        Arc::new(SystemSaltSource::new()),
    );
    let gate = SessionGate::new(
        SignedValueCodec::new(&secret),
        store,
        GateConfig::default(),
    );
    AuthService::new(hasher, gate)
}

/// Value of the `user_id` cookie set by `headers`, if any
pub(crate) fn cookie_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find_map(|pair| pair.strip_prefix("user_id=").map(str::to_string))
}
