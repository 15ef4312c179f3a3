//! Ledger domain types.
//!
//! A transaction's stored `amount` is signed: income is positive, expense negative.
//! The sign comes from [`TransactionType`], never from the caller's input.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pocketbook_shared::types::{TransactionId, UserId};

/// Transaction type: either Expense or Income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out.
    Expense,
    /// Money coming in.
    Income,
}

impl TransactionType {
    /// All variants, expense first.
    pub const ALL: [Self; 2] = [Self::Expense, Self::Income];

    /// Lowercase wire/storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Applies this type's sign to the magnitude of `amount`.
    ///
    /// Any sign already present on `amount` is discarded.
    #[must_use]
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount.abs(),
            Self::Expense => -amount.abs(),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// Raw, unvalidated input for creating a transaction.
///
/// Every field is textual and optional so that absence and malformed values
/// are reported by [`super::validation::validate_draft`] rather than by the
/// transport layer.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Amount as entered; sign is ignored.
    pub amount: Option<String>,
    /// `expense` or `income`.
    pub transaction_type: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; defaults to now.
    pub date: Option<String>,
}

/// A validated transaction ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Signed amount.
    pub amount: Decimal,
    /// Transaction type.
    pub transaction_type: TransactionType,
    /// Trimmed category label.
    pub category: String,
    /// Trimmed description.
    pub description: String,
    /// Effective date.
    pub date: DateTime<Utc>,
}

/// A stored ledger transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Signed amount (income positive, expense negative).
    pub amount: Decimal,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category label.
    pub category: String,
    /// Description.
    pub description: String,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a stored record for `user_id` from validated input.
    #[must_use]
    pub fn from_new(user_id: UserId, input: NewTransaction, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            amount: input.amount,
            transaction_type: input.transaction_type,
            category: input.category,
            description: input.description,
            date: input.date,
            created_at,
        }
    }

    /// True when the stored sign agrees with the transaction type.
    #[must_use]
    pub fn sign_is_consistent(&self) -> bool {
        match self.transaction_type {
            TransactionType::Income => self.amount >= Decimal::ZERO,
            TransactionType::Expense => self.amount <= Decimal::ZERO,
        }
    }
}
