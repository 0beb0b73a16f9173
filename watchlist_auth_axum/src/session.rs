use axum::{
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use http::{Method, StatusCode, request::Parts};

use watchlist_auth::{SessionState, SessionUser};

use super::middleware::found;
use super::state::AuthState;

/// Rejection for requests without an authenticated identity
#[derive(Debug)]
pub struct AuthRedirect {
    method: Method,
    login_path: String,
}

impl AuthRedirect {
    fn new(method: Method, login_path: &str) -> Self {
        Self {
            method,
            login_path: login_path.to_string(),
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", self.login_path);
            found(&self.login_path)
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

/// Authenticated user, available as an Axum extractor
///
/// Uses the [`SessionState`] left in the request extensions by
/// [`session_gate`](crate::session_gate) when present, and resolves the
/// session cookie itself otherwise. Anonymous GET requests are redirected to
/// the login path, other methods get `401`.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use watchlist_auth_axum::{AuthState, AuthUser};
///
/// async fn ratings(user: AuthUser) -> String {
///     format!("Ratings for {}", user.username)
/// }
///
/// fn app(state: AuthState) -> Router {
///     Router::new().route("/ratings", get(ratings)).with_state(state)
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    /// Storage key, also the session cookie payload
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<SessionUser> for AuthUser {
    fn from(session_user: SessionUser) -> Self {
        AuthUser {
            id: session_user.id,
            username: session_user.username,
            created_at: session_user.created_at,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let session = match parts.extensions.get::<SessionState>() {
            Some(session) => session.clone(),
            None => auth_state.service().gate().resolve(&parts.headers).await,
        };

        match session {
            SessionState::Authenticated(user) => Ok(AuthUser::from(user)),
            SessionState::Anonymous => Err(AuthRedirect::new(
                parts.method.clone(),
                auth_state.login_path(),
            )),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
