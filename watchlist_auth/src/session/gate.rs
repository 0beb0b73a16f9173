use std::sync::Arc;

use http::HeaderMap;

use super::config::GateConfig;
use super::cookie::{session_cookie_from_headers, set_session_cookie};
use super::errors::SessionError;
use super::types::{GateDecision, SessionState, SessionUser};
use crate::signed_value::SignedValueCodec;
use crate::userdb::UserStore;

/// Per-request authentication policy.
///
/// Reads the signed session cookie, resolves it to a user and decides whether
/// the request may reach its handler. Holds no mutable state, so a single
/// instance serves all requests concurrently.
#[derive(Clone)]
pub struct SessionGate {
    codec: SignedValueCodec,
    store: Arc<dyn UserStore>,
    config: GateConfig,
}

impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SessionGate {
    pub fn new(codec: SignedValueCodec, store: Arc<dyn UserStore>, config: GateConfig) -> Self {
        Self {
            codec,
            store,
            config,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn codec(&self) -> &SignedValueCodec {
        &self.codec
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    /// Resolve the session cookie in `headers` to a session state.
    ///
    /// Never fails: a missing, tampered or stale cookie, an unparsable key,
    /// an unknown user and a store error all resolve to `Anonymous`.
    pub async fn resolve(&self, headers: &HeaderMap) -> SessionState {
        let Some(cookie) = session_cookie_from_headers(headers, &self.config.cookie) else {
            return SessionState::Anonymous;
        };

        let Some(payload) = self.codec.check_signed_value(&cookie) else {
            tracing::debug!("Session cookie failed verification");
            return SessionState::Anonymous;
        };

        // Empty payloads are rejected by the codec; anything else must be a key
        let Ok(user_id) = payload.parse::<i64>() else {
            tracing::warn!("Signed session cookie carries a non-numeric key");
            return SessionState::Anonymous;
        };

        match self.store.find_by_id(user_id).await {
            Ok(Some(user)) => {
                tracing::debug!(user_id, "Session resolved");
                SessionState::Authenticated(SessionUser::from(user))
            }
            Ok(None) => {
                tracing::debug!(user_id, "Session refers to an unknown user");
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "User lookup failed while resolving session");
                SessionState::Anonymous
            }
        }
    }

    pub fn is_allowed_route(&self, path: &str) -> bool {
        self.config.allowed_routes.contains(path)
    }

    /// Resolve the session and apply the route allow-list.
    pub async fn decide(&self, path: &str, headers: &HeaderMap) -> GateDecision {
        let state = self.resolve(headers).await;
        if !state.is_authenticated() && !self.is_allowed_route(path) {
            tracing::debug!(%path, "Anonymous request for protected route");
            return GateDecision::RedirectToLogin(self.config.login_path.clone());
        }
        GateDecision::Proceed(state)
    }

    /// Headers issuing a session cookie for `user_id`.
    ///
    /// Nothing is recorded server-side; the cookie is the session.
    pub fn login_headers(&self, user_id: i64) -> Result<HeaderMap, SessionError> {
        let mut headers = HeaderMap::new();
        let value = self.codec.make_signed_value(&user_id.to_string());
        set_session_cookie(&mut headers, &self.config.cookie, &value)?;
        tracing::debug!(user_id, "Issued session cookie");
        Ok(headers)
    }

    /// Headers replacing the session cookie with a signed empty payload.
    pub fn logout_headers(&self) -> Result<HeaderMap, SessionError> {
        let mut headers = HeaderMap::new();
        let value = self.codec.make_signed_value("");
        set_session_cookie(&mut headers, &self.config.cookie, &value)?;
        Ok(headers)
    }
}
