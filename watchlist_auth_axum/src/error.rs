use http::StatusCode;
use watchlist_auth::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

pub(crate) fn status_for(e: &CoordinationError) -> StatusCode {
    match e {
        CoordinationError::InvalidUsername | CoordinationError::InvalidPassword => {
            StatusCode::UNAUTHORIZED
        }
        CoordinationError::Registration(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Auth flow failed");
            }
            (status, e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_auth::{RegistrationErrors, UserError};

    #[test]
    fn test_credentials_map_to_unauthorized() {
        let result: Result<(), CoordinationError> = Err(CoordinationError::InvalidPassword);
        let (status, message) = result.into_response_error().unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid password");
    }

    #[test]
    fn test_registration_maps_to_bad_request() {
        let result: Result<(), CoordinationError> =
            Err(CoordinationError::Registration(RegistrationErrors::default()));
        let (status, _) = result.into_response_error().unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_maps_to_internal_error() {
        let result: Result<(), CoordinationError> =
            Err(UserError::Storage("down".to_string()).into());
        let (status, _) = result.into_response_error().unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_success_passes_through() {
        let result: Result<&str, CoordinationError> = Ok("ok");
        assert_eq!(result.into_response_error().unwrap(), "ok");
    }
}
