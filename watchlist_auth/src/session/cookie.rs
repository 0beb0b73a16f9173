use headers::{Cookie, HeaderMapExt};
use http::HeaderMap;

use super::config::CookieConfig;
use super::errors::SessionError;
use crate::utils::header_set_cookie;

/// Value of the session cookie in the request, if any.
pub(super) fn session_cookie_from_headers(
    headers: &HeaderMap,
    config: &CookieConfig,
) -> Option<String> {
    let Some(cookies) = headers.typed_get::<Cookie>() else {
        tracing::trace!("No usable cookie header found");
        return None;
    };

    let value = cookies.get(config.name.as_str()).map(str::to_string);
    if value.is_none() {
        tracing::trace!("No session cookie '{}' found in cookies", config.name);
    }
    value
}

pub(super) fn set_session_cookie(
    headers: &mut HeaderMap,
    config: &CookieConfig,
    value: &str,
) -> Result<(), SessionError> {
    header_set_cookie(headers, &config.name, value, &config.attributes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{COOKIE, SET_COOKIE};

    fn request_headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie.parse().expect("valid header"));
        headers
    }

    #[test]
    fn test_reads_named_cookie() {
        let headers = request_headers("theme=dark; user_id=1|sig; other=x");
        assert_eq!(
            session_cookie_from_headers(&headers, &CookieConfig::default()),
            Some("1|sig".to_string())
        );
    }

    #[test]
    fn test_missing_cookie() {
        let headers = request_headers("theme=dark");
        assert_eq!(
            session_cookie_from_headers(&headers, &CookieConfig::default()),
            None
        );
        assert_eq!(
            session_cookie_from_headers(&HeaderMap::new(), &CookieConfig::default()),
            None
        );
    }

    #[test]
    fn test_custom_cookie_name() {
        let config = CookieConfig {
            name: "sid".to_string(),
            ..CookieConfig::default()
        };
        let headers = request_headers("user_id=1|a; sid=2|b");
        assert_eq!(
            session_cookie_from_headers(&headers, &config),
            Some("2|b".to_string())
        );
    }

    #[test]
    fn test_set_session_cookie_format() {
        let mut headers = HeaderMap::new();
        set_session_cookie(&mut headers, &CookieConfig::default(), "1|sig").expect("valid");
        assert_eq!(
            headers.get(SET_COOKIE).expect("cookie set"),
            "user_id=1|sig; Path=/"
        );
    }
}
