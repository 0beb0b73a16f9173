use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use thiserror::Error;

pub(crate) fn base64url_encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Fill `len` bytes from `rng` and return them base64url-encoded.
pub(crate) fn gen_random_string_with(
    rng: &dyn SecureRandom,
    len: usize,
) -> Result<String, UtilError> {
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf)
        .map_err(|_| UtilError::Crypto("Failed to generate random string".to_string()))?;
    Ok(base64url_encode(buf))
}

pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    attributes: &str,
) -> Result<(), UtilError> {
    let cookie = format!("{name}={value}; {attributes}");
    tracing::trace!("Set-Cookie: {}", cookie);
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring::rand::SystemRandom;

    #[test]
    fn test_gen_random_string_length_and_alphabet() {
        let rng = SystemRandom::new();
        let s = gen_random_string_with(&rng, 12).expect("rng should work");
        // 12 bytes encode to 16 base64 characters without padding
        assert_eq!(s.len(), 16);
        assert!(
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_gen_random_string_differs() {
        let rng = SystemRandom::new();
        let a = gen_random_string_with(&rng, 16).expect("rng should work");
        let b = gen_random_string_with(&rng, 16).expect("rng should work");
        assert_ne!(a, b);
    }

    #[test]
    fn test_header_set_cookie_appends() {
        let mut headers = HeaderMap::new();
        let first: Result<(), UtilError> =
            header_set_cookie(&mut headers, "user_id", "1|abc", "Path=/");
        assert!(first.is_ok());
        header_set_cookie(&mut headers, "other", "x", "Path=/").expect("valid cookie");

        let values: Vec<_> = headers.get_all(SET_COOKIE).iter().collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], "user_id=1|abc; Path=/");
    }

    #[test]
    fn test_header_set_cookie_rejects_control_characters() {
        let mut headers = HeaderMap::new();
        let result = header_set_cookie(&mut headers, "user_id", "bad\nvalue", "Path=/");
        assert!(matches!(result, Err(UtilError::Cookie(_))));
    }
}
