//! Registration field rules

/// 3 to 20 characters from `[a-zA-Z0-9_-]`
pub(super) fn is_valid_username(username: &str) -> bool {
    (3..=20).contains(&username.chars().count())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// 3 to 20 characters of anything except `\n`
pub(super) fn is_valid_password(password: &str) -> bool {
    (3..=20).contains(&password.chars().count()) && !password.contains('\n')
}
