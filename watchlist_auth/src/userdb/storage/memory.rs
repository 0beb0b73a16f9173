use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::UserStore;
use crate::userdb::{errors::UserError, types::User};

#[derive(Debug)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// Process-local store, used by tests and the demo when no database is configured.
#[derive(Debug)]
pub struct MemoryUserStore {
    state: RwLock<MemoryState>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, username: &str, pw_hash: &str) -> Result<User, UserError> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.username == username) {
            return Err(UserError::Conflict(format!(
                "username {username} already exists"
            )));
        }

        let user = User {
            id: state.next_id,
            username: username.to_string(),
            pw_hash: pw_hash.to_string(),
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state.users.insert(user.id, user.clone());
        tracing::debug!(user_id = user.id, "Created user in memory store");
        Ok(user)
    }
}
