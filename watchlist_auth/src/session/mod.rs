mod config;
mod cookie;
mod errors;
mod gate;
mod types;

pub use config::{
    AUTH_ALLOWED_ROUTES_ENV, AUTH_LOGIN_URL_ENV, CookieConfig, GateConfig,
    SESSION_COOKIE_HARDENED_ENV, SESSION_COOKIE_NAME_ENV,
};
pub use errors::SessionError;
pub use gate::SessionGate;
pub use types::{GateDecision, SessionState, SessionUser};
