//! Storage ports.
//!
//! Each service receives its store as `Arc<dyn Port>`, so the SeaORM adapters
//! in `pocketbook-db` and [`crate::memory::InMemoryStore`] are interchangeable.
//! Every query and mutation that touches user data takes the owning `UserId`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use pocketbook_shared::types::{SessionId, TransactionId, UserId};

use crate::analytics::{CategoryTotal, MonthlyTotal};
use crate::category::Category;
use crate::identity::{Session, User};
use crate::ledger::{Transaction, TransactionType};

/// Errors surfaced by storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("duplicate value for {field}")]
    Duplicate {
        /// Logical field that collided (e.g. `email`).
        field: String,
    },

    /// The store could not be reached.
    #[error("store connection failed: {message}")]
    Connection {
        /// Adapter-provided detail.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query {
        /// Adapter-provided detail.
        message: String,
    },
}

impl StoreError {
    /// Shorthand for a [`StoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Shorthand for a [`StoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

/// Persistence for ledger transactions.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Insert one transaction.
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Transactions owned by `user_id`, newest `date` first, at most `limit` records.
    async fn find_by_user(
        &self,
        user_id: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// Delete the transaction only if it is owned by `user_id`.
    ///
    /// Returns whether a record was removed.
    async fn delete_owned(&self, id: TransactionId, user_id: UserId) -> Result<bool, StoreError>;

    /// Net totals per UTC (year, month) for `user_id`, ascending.
    async fn monthly_totals(&self, user_id: UserId) -> Result<Vec<MonthlyTotal>, StoreError>;

    /// Net totals per category label for `user_id`, in no particular order.
    async fn category_totals(&self, user_id: UserId) -> Result<Vec<CategoryTotal>, StoreError>;
}

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. Collisions on username or email yield [`StoreError::Duplicate`].
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Find a user by (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
}

/// Persistence for categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a user category. Collisions yield [`StoreError::Duplicate`].
    async fn insert(&self, category: &Category) -> Result<(), StoreError>;

    /// Insert or refresh a system default, keyed by (name, type).
    async fn upsert_default(&self, category: &Category) -> Result<(), StoreError>;

    /// System defaults plus categories owned by `user_id`, ordered by type then name.
    async fn list_visible(
        &self,
        user_id: UserId,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, StoreError>;
}

/// Persistence for login sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a session.
    async fn insert(&self, session: &Session) -> Result<(), StoreError>;

    /// Find a session that is neither revoked nor expired at `now`.
    async fn find_active(
        &self,
        id: SessionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, StoreError>;

    /// Revoke a session. Returns whether an active session was revoked.
    async fn revoke(&self, id: SessionId) -> Result<bool, StoreError>;
}

/// Liveness probe for the backing store.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the store.
    async fn ping(&self) -> Result<(), StoreError>;
}
