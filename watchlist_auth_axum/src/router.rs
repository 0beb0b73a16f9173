//! Routers for the auth pages and for gating a whole application

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{login, login_page, logout, register, register_page};
use super::middleware::session_gate;
use super::state::AuthState;

/// Login, logout and registration endpoints
///
/// - `GET`, `POST` on the gate's login path (`/login` unless `AUTH_LOGIN_URL` is set)
/// - `GET /logout`
/// - `GET /register`, `POST /register`
///
/// These paths are on the gate's default allow-list.
pub fn auth_router(state: &AuthState) -> Router<AuthState> {
    Router::new()
        .route(state.login_path(), get(login_page).post(login))
        .route("/logout", get(logout))
        .route("/register", get(register_page).post(register))
}

/// Merge `app` with [`auth_router`] and put every route behind [`session_gate`]
///
/// Includes HTTP request tracing. Use [`gated_router_no_trace`] to bring your
/// own tracing middleware.
pub fn gated_router(app: Router<AuthState>, state: AuthState) -> Router {
    gated_router_no_trace(app, state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`gated_router`] without the HTTP tracing layer
pub fn gated_router_no_trace(app: Router<AuthState>, state: AuthState) -> Router {
    app.merge(auth_router(&state))
        .layer(from_fn_with_state(state.clone(), session_gate))
        .with_state(state)
}
