use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                UserError::Conflict(db.message().to_string())
            }
            _ => UserError::Storage(err.to_string()),
        }
    }
}
