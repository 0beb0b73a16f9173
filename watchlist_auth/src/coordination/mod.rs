mod errors;
mod user;
mod validation;

pub use errors::{CoordinationError, RegistrationErrors};
pub use user::{AuthService, LoginOutcome, RegistrationForm};
