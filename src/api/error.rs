//! Closed error kinds for the API boundary
//!
//! Callers branch on the kind, not on message text. `NotFound` is split out
//! of the general request-failure case so repositories and dialogs can treat
//! a vanished record differently from a rejected one.

use thiserror::Error;

/// Result alias used throughout the API and repository layers
pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure the client layer can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Local pre-submit validation failure; never reached the network
    #[error("{0}")]
    Validation(String),

    /// Non-2xx HTTP response carrying the server-supplied message
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Transport failure or timeout; no usable response
    #[error("network error: {0}")]
    Network(String),

    /// The addressed entity does not exist
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Classify a non-success HTTP status with its extracted message
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 404 {
            ApiError::NotFound(message)
        } else {
            ApiError::RequestFailed { status, message }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
