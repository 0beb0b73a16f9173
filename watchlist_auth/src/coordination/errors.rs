//! Error types for the registration and login flows

use std::fmt;

use thiserror::Error;

use crate::password::PasswordError;
use crate::session::SessionError;
use crate::userdb::UserError;

pub(super) const USERNAME_TAKEN: &str = "A user with that username already exists";
pub(super) const INVALID_USERNAME_FIELD: &str = "That's not a valid username";
pub(super) const INVALID_PASSWORD_FIELD: &str = "That's not a valid password";
pub(super) const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

/// Per-field messages for a rejected registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify: Option<String>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.verify.is_none()
    }

    pub(super) fn username_taken() -> Self {
        Self {
            username: Some(USERNAME_TAKEN.to_string()),
            ..Self::default()
        }
    }
}

impl fmt::Display for RegistrationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [&self.username, &self.password, &self.verify]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Errors that can occur during authentication coordination
#[derive(Error, Debug)]
pub enum CoordinationError {
    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid registration: {0}")]
    Registration(RegistrationErrors),

    /// A blocking task panicked or was cancelled
    #[error("Coordination error: {0}")]
    Coordination(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("User error: {0}")]
    User(#[from] UserError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_messages() {
        assert_eq!(CoordinationError::InvalidUsername.to_string(), "Invalid username");
        assert_eq!(CoordinationError::InvalidPassword.to_string(), "Invalid password");
    }

    #[test]
    fn test_registration_errors_display() {
        let errors = RegistrationErrors {
            username: Some(INVALID_USERNAME_FIELD.to_string()),
            password: None,
            verify: Some(PASSWORDS_DONT_MATCH.to_string()),
        };
        assert!(!errors.is_empty());
        assert_eq!(
            errors.to_string(),
            "That's not a valid username; Passwords don't match"
        );
        assert!(RegistrationErrors::default().is_empty());
    }

    #[test]
    fn test_from_user_error() {
        let err: CoordinationError = UserError::Storage("down".to_string()).into();
        assert!(matches!(err, CoordinationError::User(UserError::Storage(_))));
    }
}
