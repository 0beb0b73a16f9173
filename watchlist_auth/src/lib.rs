//! watchlist_auth - authentication and session integrity for the watchlist app
//!
//! Passwords are stored as salted `hash,salt` records, sessions live entirely
//! in a signed `user_id` cookie, and every request is checked by a
//! [`SessionGate`] before it reaches a handler. The only server-side secret is
//! the signing key in [`ServerSecret`].

mod coordination;
mod password;
mod secret;
mod session;
mod signed_value;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    AuthService, CoordinationError, LoginOutcome, RegistrationErrors, RegistrationForm,
};

pub use password::{
    PASSWORD_HASH_ALGORITHM_ENV, PASSWORD_HASH_ITERATIONS_ENV, PasswordAlgorithm, PasswordError,
    PasswordHasher, PasswordRecord, SaltSource, SystemSaltSource,
};

pub use secret::{AUTH_SERVER_SECRET_ENV, SecretError, ServerSecret};

pub use session::{
    AUTH_ALLOWED_ROUTES_ENV, AUTH_LOGIN_URL_ENV, CookieConfig, GateConfig, GateDecision,
    SESSION_COOKIE_HARDENED_ENV, SESSION_COOKIE_NAME_ENV, SessionError, SessionGate, SessionState,
    SessionUser,
};

pub use signed_value::{SignedValue, SignedValueCodec};

pub use userdb::{
    DB_TABLE_PREFIX_ENV, GENERIC_DATA_STORE_TYPE_ENV, GENERIC_DATA_STORE_URL_ENV, MemoryUserStore,
    SqliteUserStore, User, UserError, UserStore, store_from_env,
};

pub use utils::UtilError;
