mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use storage::{
    DB_TABLE_PREFIX_ENV, GENERIC_DATA_STORE_TYPE_ENV, GENERIC_DATA_STORE_URL_ENV, MemoryUserStore,
    SqliteUserStore, UserStore, store_from_env,
};
pub use types::User;
