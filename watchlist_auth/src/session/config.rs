use std::collections::BTreeSet;
use std::env;

pub const SESSION_COOKIE_NAME_ENV: &str = "SESSION_COOKIE_NAME";
pub const SESSION_COOKIE_HARDENED_ENV: &str = "SESSION_COOKIE_HARDENED";
pub const AUTH_ALLOWED_ROUTES_ENV: &str = "AUTH_ALLOWED_ROUTES";
pub const AUTH_LOGIN_URL_ENV: &str = "AUTH_LOGIN_URL";

const DEFAULT_COOKIE_NAME: &str = "user_id";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_ALLOWED_ROUTES: [&str; 3] = ["/login", "/logout", "/register"];

/// Attributes of the session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieConfig {
    pub name: String,
    pub path: String,
    /// Adds `HttpOnly; SameSite=Lax; Secure`
    pub hardened: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            path: "/".to_string(),
            hardened: false,
        }
    }
}

impl CookieConfig {
    /// Everything after `name=value; ` in the `Set-Cookie` header
    pub(crate) fn attributes(&self) -> String {
        if self.hardened {
            format!("Path={}; HttpOnly; SameSite=Lax; Secure", self.path)
        } else {
            format!("Path={}", self.path)
        }
    }
}

/// Routing policy applied by the session gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub cookie: CookieConfig,
    /// Paths reachable without an authenticated identity
    pub allowed_routes: BTreeSet<String>,
    /// Where anonymous requests for protected paths are sent
    pub login_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            allowed_routes: DEFAULT_ALLOWED_ROUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(SESSION_COOKIE_NAME_ENV).ok().as_deref(),
            env::var(SESSION_COOKIE_HARDENED_ENV).ok().as_deref(),
            env::var(AUTH_ALLOWED_ROUTES_ENV).ok().as_deref(),
            env::var(AUTH_LOGIN_URL_ENV).ok().as_deref(),
        )
    }

    fn from_values(
        cookie_name: Option<&str>,
        hardened: Option<&str>,
        allowed_routes: Option<&str>,
        login_path: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let cookie = CookieConfig {
            name: cookie_name
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.cookie.name),
            path: defaults.cookie.path,
            hardened: hardened
                .map(|val| val.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        };

        // Mounted as a route, so it must be an absolute path
        let login_path = match login_path.map(str::trim).filter(|s| !s.is_empty()) {
            Some(path) if path.starts_with('/') => path.to_string(),
            Some(path) => {
                tracing::warn!(
                    "Ignoring {}={:?}: must start with '/', using {}",
                    AUTH_LOGIN_URL_ENV,
                    path,
                    defaults.login_path
                );
                defaults.login_path
            }
            None => defaults.login_path,
        };

        let mut allowed_routes = match allowed_routes {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.allowed_routes,
        };
        // Anonymous users must be able to reach the page they are redirected to
        allowed_routes.insert(login_path.clone());

        Self {
            cookie,
            allowed_routes,
            login_path,
        }
    }
}
