//! watchlist_auth_axum - Axum integration for watchlist_auth
//!
//! Provides the session gate middleware, an [`AuthUser`] extractor and the
//! login, logout and registration endpoints.
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use watchlist_auth_axum::{AuthState, AuthUser, gated_router};
//!
//! async fn ratings(user: AuthUser) -> String {
//!     format!("Ratings for {}", user.username)
//! }
//!
//! fn app(state: AuthState) -> Router {
//!     gated_router(Router::new().route("/ratings", get(ratings)), state)
//! }
//! ```

mod config;
mod error;
mod handlers;
mod middleware;
mod pages;
mod router;
mod session;
mod state;

#[cfg(test)]
mod test_utils;

pub use config::AUTH_REDIRECT_USER;
pub use error::IntoResponseError;
pub use middleware::session_gate;
pub use router::{auth_router, gated_router, gated_router_no_trace};
pub use session::{AuthRedirect, AuthUser};
pub use state::AuthState;

pub use watchlist_auth::{AuthService, ServerSecret, SessionState, store_from_env};
