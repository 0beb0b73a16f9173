use std::sync::Arc;

use watchlist_auth::AuthService;

/// Shared handle to the auth service, used as axum router state
#[derive(Clone, Debug)]
pub struct AuthState {
    service: Arc<AuthService>,
}

impl AuthState {
    pub fn new(service: AuthService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &AuthService {
        &self.service
    }

    pub(crate) fn login_path(&self) -> &str {
        &self.service.gate().config().login_path
    }
}
