//! Ledger of signed income and expense records.
//!
//! This module implements:
//! - Domain types for transactions and raw drafts
//! - Validation of amount, type, category, description and date
//! - Error types for ledger operations
//! - Ledger service for owner-scoped create, list and delete

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{NewTransaction, Transaction, TransactionDraft, TransactionType};
