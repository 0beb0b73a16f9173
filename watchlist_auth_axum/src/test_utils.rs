//! Shared setup for the crate's unit tests

use std::num::NonZeroU32;
use std::sync::Arc;

use watchlist_auth::{
    AuthService, GateConfig, MemoryUserStore, PasswordAlgorithm, PasswordHasher,
    RegistrationForm, ServerSecret, SessionGate, SessionUser, SignedValueCodec, SystemSaltSource,
};

use crate::state::AuthState;

/// State over an in-memory store holding `alice` / `wonder1`
///
/// Key derivation runs with few iterations to keep tests fast.
pub(crate) async fn test_state() -> (AuthState, SessionUser) {
    test_state_with(GateConfig::default()).await
}

pub(crate) async fn test_state_with(config: GateConfig) -> (AuthState, SessionUser) {
    let secret = ServerSecret::new("axum-test-secret").expect("non-empty secret");
    let hasher = PasswordHasher::new(
        PasswordAlgorithm::Pbkdf2Sha256 {
            iterations: NonZeroU32::new(1000).expect("non-zero"),
        },
        Arc::new(SystemSaltSource::new()),
    );
    let gate = SessionGate::new(
        SignedValueCodec::new(&secret),
        Arc::new(MemoryUserStore::new()),
        config,
    );
    let service = AuthService::new(hasher, gate);

    let alice = service
        .register(&RegistrationForm {
            username: "alice".to_string(),
            password: "wonder1".to_string(),
            verify: "wonder1".to_string(),
        })
        .await
        .expect("register alice")
        .user;

    (AuthState::new(service), alice)
}

/// `Cookie` header value carrying `payload` signed with the state's secret
pub(crate) fn signed_cookie(state: &AuthState, payload: &str) -> String {
    format!(
        "user_id={}",
        state.service().gate().codec().make_signed_value(payload)
    )
}
