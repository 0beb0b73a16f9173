use std::sync::Arc;

use http::HeaderMap;

use super::errors::{
    CoordinationError, INVALID_PASSWORD_FIELD, INVALID_USERNAME_FIELD, PASSWORDS_DONT_MATCH,
    RegistrationErrors,
};
use super::validation::{is_valid_password, is_valid_username};
use crate::password::{PasswordAlgorithm, PasswordHasher, SystemSaltSource};
use crate::secret::ServerSecret;
use crate::session::{GateConfig, SessionGate, SessionUser};
use crate::signed_value::SignedValueCodec;
use crate::userdb::{UserError, UserStore};

/// Submitted registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub verify: String,
}

/// A freshly authenticated user and the headers carrying their session cookie
#[derive(Debug)]
pub struct LoginOutcome {
    pub user: SessionUser,
    pub headers: HeaderMap,
}

/// Registration, login and logout on top of the hasher and the session gate.
#[derive(Debug, Clone)]
pub struct AuthService {
    hasher: PasswordHasher,
    gate: SessionGate,
}

impl AuthService {
    pub fn new(hasher: PasswordHasher, gate: SessionGate) -> Self {
        Self { hasher, gate }
    }

    /// Wire up the service from the environment around an explicit secret and store.
    pub fn from_env(
        secret: &ServerSecret,
        store: Arc<dyn UserStore>,
    ) -> Result<Self, CoordinationError> {
        let hasher = PasswordHasher::new(
            PasswordAlgorithm::from_env()?,
            Arc::new(SystemSaltSource::new()),
        );
        let gate = SessionGate::new(SignedValueCodec::new(secret), store, GateConfig::from_env());
        tracing::info!(algorithm = ?hasher.algorithm(), config = ?gate.config(), "Auth service configured");
        Ok(Self::new(hasher, gate))
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    /// Validate the form, create the user and log them in.
    #[tracing::instrument(skip(self, form), fields(username = %form.username))]
    pub async fn register(&self, form: &RegistrationForm) -> Result<LoginOutcome, CoordinationError> {
        let username_ok = is_valid_username(&form.username);

        if username_ok && self.gate.store().find_by_username(&form.username).await?.is_some() {
            tracing::info!("Registration rejected: username taken");
            return Err(CoordinationError::Registration(
                RegistrationErrors::username_taken(),
            ));
        }

        let errors = RegistrationErrors {
            username: (!username_ok).then(|| INVALID_USERNAME_FIELD.to_string()),
            password: (!is_valid_password(&form.password))
                .then(|| INVALID_PASSWORD_FIELD.to_string()),
            verify: (form.password != form.verify).then(|| PASSWORDS_DONT_MATCH.to_string()),
        };
        if !errors.is_empty() {
            tracing::info!(%errors, "Registration rejected");
            return Err(CoordinationError::Registration(errors));
        }

        let pw_hash = self.hash_password(&form.username, &form.password).await?;
        let user = match self.gate.store().create_user(&form.username, &pw_hash).await {
            Ok(user) => user,
            // Lost a race with a concurrent registration of the same name
            Err(UserError::Conflict(_)) => {
                return Err(CoordinationError::Registration(
                    RegistrationErrors::username_taken(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let headers = self.gate.login_headers(user.id)?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(LoginOutcome {
            user: SessionUser::from(user),
            headers,
        })
    }

    /// Check credentials and issue a session cookie. Failure issues nothing.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, CoordinationError> {
        let Some(user) = self.gate.store().find_by_username(username).await? else {
            tracing::info!("Login rejected: unknown username");
            return Err(CoordinationError::InvalidUsername);
        };

        if !self
            .verify_password(username, password, &user.pw_hash)
            .await?
        {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(CoordinationError::InvalidPassword);
        }

        let headers = self.gate.login_headers(user.id)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(LoginOutcome {
            user: SessionUser::from(user),
            headers,
        })
    }

    pub fn logout(&self) -> Result<HeaderMap, CoordinationError> {
        Ok(self.gate.logout_headers()?)
    }

    // Key derivation is CPU bound, keep it off the async workers
    async fn hash_password(&self, username: &str, password: &str) -> Result<String, CoordinationError> {
        let hasher = self.hasher.clone();
        let (username, password) = (username.to_string(), password.to_string());
        let stored = tokio::task::spawn_blocking(move || {
            hasher.hash_password(&username, &password, None)
        })
        .await
        .map_err(|e| CoordinationError::Coordination(e.to_string()))??;
        Ok(stored)
    }

    async fn verify_password(
        &self,
        username: &str,
        password: &str,
        stored: &str,
    ) -> Result<bool, CoordinationError> {
        let hasher = self.hasher.clone();
        let (username, password, stored) =
            (username.to_string(), password.to_string(), stored.to_string());
        tokio::task::spawn_blocking(move || hasher.verify_password(&username, &password, &stored))
            .await
            .map_err(|e| CoordinationError::Coordination(e.to_string()))
    }
}
