use axum::{
    extract::{Request, State},
    http::{StatusCode, header::LOCATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

use watchlist_auth::{GateDecision, SessionState};

use super::session::AuthUser;
use super::state::AuthState;

/// `302 Found` to `location`
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// Gate every request on its session cookie.
///
/// Anonymous requests for routes outside the allow-list are redirected to the
/// login path and never reach their handler. Everything else continues with
/// the resolved [`SessionState`], and with an [`AuthUser`] when authenticated,
/// in the request extensions.
///
/// ```no_run
/// use axum::{Router, middleware::from_fn_with_state, routing::get};
/// use watchlist_auth_axum::{AuthState, session_gate};
///
/// fn app(state: AuthState) -> Router {
///     Router::new()
///         .route("/ratings", get(|| async { "ratings" }))
///         .layer(from_fn_with_state(state.clone(), session_gate))
///         .with_state(state)
/// }
/// ```
pub async fn session_gate(State(state): State<AuthState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    match state.service().gate().decide(&path, req.headers()).await {
        GateDecision::RedirectToLogin(login_path) => {
            tracing::debug!(%path, "Redirecting anonymous request to {}", login_path);
            found(&login_path)
        }
        GateDecision::Proceed(session) => {
            if let SessionState::Authenticated(user) = &session {
                req.extensions_mut().insert(AuthUser::from(user.clone()));
            }
            req.extensions_mut().insert(session);
            next.run(req).await
        }
    }
}
