//! Ledger error types.
//!
//! Input errors map to `VALIDATION_ERROR`; storage errors keep their
//! connection/query distinction so the API can answer 503 or 500.

use thiserror::Error;

use pocketbook_shared::AppError;

use crate::ports::StoreError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// A required field was absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Amount is not a decimal number.
    #[error("Amount must be a number: {0}")]
    InvalidAmount(String),

    /// Amount cannot be zero.
    #[error("Amount cannot be zero")]
    ZeroAmount,

    /// Amount has more than two decimal places.
    #[error("Amount cannot have more than 2 decimal places")]
    TooManyDecimalPlaces,

    /// Amount magnitude is beyond the storable range.
    #[error("Amount is out of range")]
    AmountOutOfRange,

    /// Type is neither `expense` nor `income`.
    #[error("Type must be 'expense' or 'income', got '{0}'")]
    InvalidType(String),

    /// Category is empty after trimming.
    #[error("Category cannot be blank")]
    BlankCategory,

    /// Category exceeds the maximum length.
    #[error("Category cannot exceed {max} characters")]
    CategoryTooLong {
        /// Maximum characters.
        max: usize,
    },

    /// Description exceeds the maximum length.
    #[error("Description cannot exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum characters.
        max: usize,
    },

    /// Date could not be parsed.
    #[error("Invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),

    /// Listing limit must be positive.
    #[error("Limit must be a positive integer")]
    InvalidLimit,

    // ========== Storage Errors ==========
    /// Storage adapter failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connection { message } => Self::ServiceUnavailable(message),
            StoreError::Duplicate { field } => Self::Duplicate(format!("{field} already exists")),
            StoreError::Query { message } => Self::Database(message),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Storage(store) => store.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}
