use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::UserStore;
use crate::userdb::{errors::UserError, types::User};

/// SQLite-backed user store.
///
/// The table is created by [`SqliteUserStore::init`]; every query binds its
/// values, the table name is the only interpolated part.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
    table: String,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Build a lazily connecting pool for `url`, creating the file if needed.
    ///
    /// `sqlite::memory:` databases live per connection, so they get a single
    /// connection that is never recycled.
    pub fn connect_lazy(url: &str, table: impl Into<String>) -> Result<Self, UserError> {
        let opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        Ok(Self::new(pool_options.connect_lazy_with(opts), table))
    }

    pub async fn init(&self) -> Result<(), UserError> {
        let table_name = self.table.as_str();
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table_name} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                pw_hash TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
            "#
        ))
        .execute(&self.pool)
        .await?;

        tracing::info!(table = %table_name, "User table ready");
        Ok(())
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserError> {
        let table_name = self.table.as_str();
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT * FROM {table_name} WHERE id = ?
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let table_name = self.table.as_str();
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT * FROM {table_name} WHERE username = ?
            "#
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self, pw_hash))]
    async fn create_user(&self, username: &str, pw_hash: &str) -> Result<User, UserError> {
        let table_name = self.table.as_str();
        let result = sqlx::query(&format!(
            r#"
            INSERT INTO {table_name} (username, pw_hash, created_at)
            VALUES (?, ?, ?)
            "#
        ))
        .bind(username)
        .bind(pw_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(user_id = id, "Created user");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| UserError::Storage(format!("User {id} vanished after insert")))
    }
}
