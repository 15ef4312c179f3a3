//! Identity error types.

use thiserror::Error;

use pocketbook_shared::{AppError, JwtError};

use super::password::PasswordError;
use crate::ports::StoreError;

/// Errors that can occur during registration, login and session checks.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Unknown email or wrong password. The two are never distinguished.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing token, bad signature, expired or revoked session.
    #[error("Not logged in")]
    SessionInvalid,

    /// Input failed validation.
    #[error("{0}")]
    Validation(String),

    /// Username or email already registered.
    #[error("{0} is already registered")]
    Duplicate(String),

    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token signing failed.
    #[error(transparent)]
    Token(#[from] JwtError),

    /// Storage adapter failure.
    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for IdentityError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field } => Self::Duplicate(field),
            other => Self::Storage(other),
        }
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::InvalidCredentials | IdentityError::SessionInvalid => {
                Self::Unauthorized(err.to_string())
            }
            IdentityError::Validation(msg) => Self::Validation(msg),
            IdentityError::Duplicate(_) => Self::Duplicate(err.to_string()),
            IdentityError::Password(e) => Self::Internal(e.to_string()),
            IdentityError::Token(e) => Self::Internal(e.to_string()),
            IdentityError::Storage(e) => e.into(),
        }
    }
}
