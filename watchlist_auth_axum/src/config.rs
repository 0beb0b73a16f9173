//! Central configuration for the watchlist_auth_axum crate

use std::sync::LazyLock;

/// Where users land after logging in or registering
/// Default: "/"
pub static AUTH_REDIRECT_USER: LazyLock<String> =
    LazyLock::new(|| redirect_user_from(std::env::var("AUTH_REDIRECT_USER").ok()));

fn redirect_user_from(env_value: Option<String>) -> String {
    env_value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_user_default() {
        assert_eq!(redirect_user_from(None), "/");
    }

    #[test]
    fn test_redirect_user_custom() {
        assert_eq!(
            redirect_user_from(Some("/watchlist".to_string())),
            "/watchlist"
        );
    }

    #[test]
    fn test_redirect_user_blank_falls_back() {
        assert_eq!(redirect_user_from(Some("  ".to_string())), "/");
    }
}
