//! Ledger service for owner-scoped transaction records.
//!
//! Validation happens here; persistence goes through [`LedgerStore`].

use std::sync::Arc;

use chrono::Utc;

use pocketbook_shared::LedgerConfig;
use pocketbook_shared::types::{TransactionId, UserId};

use super::error::LedgerError;
use super::types::{Transaction, TransactionDraft};
use super::validation::{effective_limit, validate_draft};
use crate::ports::LedgerStore;

/// Ledger service for creating, listing and deleting transactions.
#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
    config: LedgerConfig,
}

impl LedgerService {
    /// Creates a new ledger service.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    /// Validates `draft` and stores it as a transaction owned by `user_id`.
    ///
    /// The stored amount is signed by type: expenses negative, income positive.
    ///
    /// # Errors
    ///
    /// Returns a validation variant of [`LedgerError`] for bad input, or
    /// [`LedgerError::Storage`] if the insert fails. Nothing is stored on error.
    pub async fn create(
        &self,
        user_id: UserId,
        draft: &TransactionDraft,
    ) -> Result<Transaction, LedgerError> {
        let now = Utc::now();
        let input = validate_draft(draft, now)?;
        let transaction = Transaction::from_new(user_id, input, now);

        self.store.insert(&transaction).await.inspect_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to insert transaction");
        })?;

        tracing::info!(
            user_id = %user_id,
            transaction_id = %transaction.id,
            transaction_type = %transaction.transaction_type,
            "Transaction recorded"
        );

        Ok(transaction)
    }

    /// Lists the transactions owned by `user_id`, newest date first.
    ///
    /// `limit` of `None` uses the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidLimit`] for a zero limit, or
    /// [`LedgerError::Storage`] if the query fails.
    pub async fn get_by_user(
        &self,
        user_id: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let limit = effective_limit(limit, self.config.default_limit, self.config.max_limit)?;
        let transactions = self.store.find_by_user(user_id, limit).await?;

        tracing::debug!(
            user_id = %user_id,
            count = transactions.len(),
            "Listed transactions"
        );

        Ok(transactions)
    }

    /// Deletes transaction `id` if and only if `user_id` owns it.
    ///
    /// Returns `false` when the record does not exist or belongs to someone
    /// else; the two cases are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Storage`] if the delete fails.
    pub async fn delete(&self, id: TransactionId, user_id: UserId) -> Result<bool, LedgerError> {
        let deleted = self.store.delete_owned(id, user_id).await?;

        if deleted {
            tracing::info!(user_id = %user_id, transaction_id = %id, "Transaction deleted");
        } else {
            tracing::debug!(user_id = %user_id, transaction_id = %id, "No owned transaction to delete");
        }

        Ok(deleted)
    }
}
