//! Category error types.

use thiserror::Error;

use pocketbook_shared::AppError;

use crate::ports::StoreError;

/// Errors that can occur during category operations.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Input failed validation.
    #[error("{0}")]
    Validation(String),

    /// The owner already has a category with this name and type.
    #[error("Category '{0}' already exists")]
    Duplicate(String),

    /// Storage adapter failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::Validation(msg) => Self::Validation(msg),
            CategoryError::Duplicate(_) => Self::Duplicate(err.to_string()),
            CategoryError::Storage(e) => e.into(),
        }
    }
}
