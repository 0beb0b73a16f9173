use thiserror::Error;

use crate::utils::UtilError;

/// Failures while issuing session cookies.
///
/// Reading a session never fails: bad input resolves to an anonymous state.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
