mod config;
mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::userdb::{errors::UserError, types::User};

pub use config::{
    DB_TABLE_PREFIX_ENV, GENERIC_DATA_STORE_TYPE_ENV, GENERIC_DATA_STORE_URL_ENV, store_from_env,
};
pub use memory::MemoryUserStore;
pub use sqlite::SqliteUserStore;

/// Lookup and creation of user records.
///
/// Implementations may block on I/O; the session layer awaits them and never
/// caches results.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Insert a new user. An existing username is a `UserError::Conflict`.
    async fn create_user(&self, username: &str, pw_hash: &str) -> Result<User, UserError>;
}
