use std::env;
use std::sync::Arc;

use super::{MemoryUserStore, SqliteUserStore, UserStore};
use crate::userdb::errors::UserError;

pub const GENERIC_DATA_STORE_TYPE_ENV: &str = "GENERIC_DATA_STORE_TYPE";
pub const GENERIC_DATA_STORE_URL_ENV: &str = "GENERIC_DATA_STORE_URL";
pub const DB_TABLE_PREFIX_ENV: &str = "DB_TABLE_PREFIX";

fn users_table(prefix: Option<String>) -> String {
    format!("{}users", prefix.unwrap_or_else(|| "wl_".to_string()))
}

/// Build the user store selected by `GENERIC_DATA_STORE_TYPE`.
///
/// `memory` (the default) keeps users in process. `sqlite` requires
/// `GENERIC_DATA_STORE_URL` and creates its table before returning.
pub async fn store_from_env() -> Result<Arc<dyn UserStore>, UserError> {
    let store_type = env::var(GENERIC_DATA_STORE_TYPE_ENV).unwrap_or_else(|_| "memory".to_string());

    tracing::info!("Initializing user store with type: {}", store_type);

    match store_type.as_str() {
        "memory" => Ok(Arc::new(MemoryUserStore::new())),
        "sqlite" => {
            let url = env::var(GENERIC_DATA_STORE_URL_ENV).map_err(|_| {
                UserError::InvalidData(format!("{GENERIC_DATA_STORE_URL_ENV} must be set"))
            })?;
            let table = users_table(env::var(DB_TABLE_PREFIX_ENV).ok());
            let store = SqliteUserStore::connect_lazy(&url, table)?;
            store.init().await?;
            Ok(Arc::new(store))
        }
        t => Err(UserError::InvalidData(format!(
            "Unsupported store type: {t}. Supported types are 'memory' and 'sqlite'"
        ))),
    }
}
