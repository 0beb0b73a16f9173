use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account as held by the user store
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct User {
    /// Store-assigned key; this is what the session cookie carries
    pub id: i64,
    pub username: String,
    /// Password record in `hash,salt` form
    pub pw_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Decimal form of the key, used as the signed cookie payload
    pub fn session_key(&self) -> String {
        self.id.to_string()
    }
}
