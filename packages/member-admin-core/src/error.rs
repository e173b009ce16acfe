//! Admin client error types.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type for admin client operations.
pub type Result<T> = std::result::Result<T, AdminError>;

/// Member administration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// No row is bound to the resource URL
    #[error("Row '{url}' not found")]
    RowNotFound { url: String },

    /// Row is already in the editing state
    #[error("Row '{url}' is already being edited")]
    AlreadyEditing { url: String },

    /// Row is locked
    #[error("Row '{url}' is not being edited")]
    NotEditing { url: String },

    /// Client-side field validation failed
    #[error("Validation failed:\n{0}")]
    Validation(ValidationErrors),

    /// Server refused the action (HTTP 403)
    #[error("Access denied: {0}")]
    AuthorizationDenied(String),

    /// Server answered with a non-success status other than 403
    #[error("Request failed with status {status}: {message}")]
    RequestFailure { status: u16, message: String },

    /// Connection-level failure, no response received
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Session store could not be read or written
    #[error("Session store error: {0}")]
    Session(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AdminError {
    /// Whether the operator can retry the same action unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AdminError::RequestFailure { .. } | AdminError::TransportFailure(_)
        )
    }
}
