//! Mapping of `SeaORM` errors onto the core `StoreError`.

use sea_orm::{DbErr, SqlErr};

use pocketbook_core::StoreError;

/// Converts a `DbErr` into a [`StoreError`].
///
/// Unique violations become `Duplicate` with the logical field taken from the
/// constraint name; pool and connection failures become `Connection`.
#[must_use]
pub fn store_error(err: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return StoreError::Duplicate {
            field: unique_field(&detail).to_string(),
        };
    }

    match err {
        DbErr::Conn(e) => StoreError::connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::connection(e.to_string()),
        other => StoreError::query(other.to_string()),
    }
}

/// Logical field behind a unique-violation message.
#[must_use]
pub fn unique_field(detail: &str) -> &'static str {
    if detail.contains("uq_users_email") {
        "email"
    } else if detail.contains("uq_users_username") {
        "username"
    } else if detail.contains("uq_categories_owner_name_type") {
        "name"
    } else if detail.contains("uq_sessions_token_hash") {
        "token_hash"
    } else {
        "value"
    }
}
