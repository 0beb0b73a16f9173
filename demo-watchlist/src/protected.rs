use axum::{Router, routing::get};

use watchlist_auth_axum::{AuthState, AuthUser};

/// Pages that only make sense with a logged in user; the gate redirects everyone else
pub(super) fn router() -> Router<AuthState> {
    Router::new()
        .route("/", get(index))
        .route("/ratings", get(ratings))
        .route("/watchlist", get(watchlist))
}

async fn index(user: AuthUser) -> String {
    format!(
        "Hello, {}! Member since {}.",
        user.username,
        user.created_at.format("%Y-%m-%d")
    )
}

async fn ratings(user: AuthUser) -> String {
    format!("Ratings for {}", user.username)
}

async fn watchlist(user: AuthUser) -> String {
    format!("Watchlist for {}", user.username)
}
