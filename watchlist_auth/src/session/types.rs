use chrono::{DateTime, Utc};

use crate::userdb::User as DbUser;

/// Identity attached to an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for SessionUser {
    fn from(db_user: DbUser) -> Self {
        Self {
            id: db_user.id,
            username: db_user.username,
            created_at: db_user.created_at,
        }
    }
}

/// Outcome of resolving the session cookie of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(SessionUser),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// What the request pipeline should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Run the handler with this session state
    Proceed(SessionState),
    /// Short-circuit with a redirect to the login path
    RedirectToLogin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_db_user_drops_password_record() {
        let now = Utc::now();
        let db_user = DbUser {
            id: 3,
            username: "carol".to_string(),
            pw_hash: "hash,salt".to_string(),
            created_at: now,
        };
        let user = SessionUser::from(db_user);
        assert_eq!(user.id, 3);
        assert_eq!(user.username, "carol");
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn test_session_state_accessors() {
        let user = SessionUser {
            id: 1,
            username: "alice".to_string(),
            created_at: Utc::now(),
        };
        let state = SessionState::Authenticated(user.clone());
        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some(&user));

        assert!(!SessionState::Anonymous.is_authenticated());
        assert_eq!(SessionState::Anonymous.user(), None);
    }
}
