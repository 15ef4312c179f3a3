//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every domain error collapses into one of these at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or no active session.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found, or not owned by the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unique constraint hit (e.g., email already registered).
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The database could not be reached.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::Duplicate(_) => 400,
            Self::ServiceUnavailable(_) => 503,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Duplicate(_) => "DUPLICATE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the client-facing message.
    ///
    /// Storage and internal details are replaced by a generic sentence; the
    /// detail is for logs only.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Duplicate(msg) => msg,
            Self::Database(_) => "A database error occurred",
            Self::ServiceUnavailable(_) => "The database is unavailable, please retry later",
            Self::Internal(_) => "An internal error occurred",
        }
    }
}
