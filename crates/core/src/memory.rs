//! In-process store implementing every port.
//!
//! Used by unit and HTTP tests. Availability can be toggled to exercise the
//! connection-failure paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use pocketbook_shared::types::{CategoryId, SessionId, TransactionId, UserId};

use crate::analytics::{CategoryTotal, MonthlyTotal, bucket_by_category, bucket_by_month};
use crate::category::Category;
use crate::identity::{Session, User};
use crate::ledger::{Transaction, TransactionType};
use crate::ports::{CategoryStore, HealthCheck, LedgerStore, SessionStore, StoreError, UserStore};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    transactions: HashMap<TransactionId, Transaction>,
    categories: HashMap<CategoryId, Category>,
    sessions: HashMap<SessionId, Session>,
}

/// In-memory implementation of all storage ports.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    available: AtomicBool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulates the backing store going down or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::connection("in-memory store is unavailable"))
        }
    }

    fn duplicate(field: &str) -> StoreError {
        StoreError::Duplicate {
            field: field.to_string(),
        }
    }
}

#[async_trait]
impl LedgerStore for InMemoryStore {
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        tables
            .transactions
            .insert(transaction.id, transaction.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        let mut owned: Vec<Transaction> = tables
            .transactions
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        if let Some(limit) = limit {
            owned.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(owned)
    }

    async fn delete_owned(&self, id: TransactionId, user_id: UserId) -> Result<bool, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let owned = tables
            .transactions
            .get(&id)
            .is_some_and(|t| t.user_id == user_id);
        if owned {
            tables.transactions.remove(&id);
        }
        Ok(owned)
    }

    async fn monthly_totals(&self, user_id: UserId) -> Result<Vec<MonthlyTotal>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(bucket_by_month(
            tables.transactions.values().filter(|t| t.user_id == user_id),
        ))
    }

    async fn category_totals(&self, user_id: UserId) -> Result<Vec<CategoryTotal>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(bucket_by_category(
            tables.transactions.values().filter(|t| t.user_id == user_id),
        ))
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(Self::duplicate("username"));
        }
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(Self::duplicate("email"));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }
}

#[async_trait]
impl CategoryStore for InMemoryStore {
    async fn insert(&self, category: &Category) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let taken = tables.categories.values().any(|c| {
            c.user_id == category.user_id && c.name == category.name && c.kind == category.kind
        });
        if taken {
            return Err(Self::duplicate("name"));
        }
        tables.categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn upsert_default(&self, category: &Category) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let existing = tables
            .categories
            .values()
            .find(|c| c.user_id.is_none() && c.name == category.name && c.kind == category.kind)
            .map(|c| c.id);
        match existing.and_then(|id| tables.categories.get_mut(&id)) {
            Some(current) => {
                current.icon.clone_from(&category.icon);
                current.color.clone_from(&category.color);
            }
            None => {
                let mut fresh = category.clone();
                fresh.user_id = None;
                tables.categories.insert(fresh.id, fresh);
            }
        }
        Ok(())
    }

    async fn list_visible(
        &self,
        user_id: UserId,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        let mut visible: Vec<Category> = tables
            .categories
            .values()
            .filter(|c| c.user_id.is_none() || c.user_id == Some(user_id))
            .filter(|c| kind.is_none_or(|k| c.kind == k))
            .cloned()
            .collect();
        visible.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        Ok(visible)
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn insert(&self, session: &Session) -> Result<(), StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        if tables
            .sessions
            .values()
            .any(|s| s.token_hash == session.token_hash)
        {
            return Err(Self::duplicate("token_hash"));
        }
        tables.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn find_active(
        &self,
        id: SessionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, StoreError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .sessions
            .get(&id)
            .filter(|s| s.is_active(now))
            .cloned())
    }

    async fn revoke(&self, id: SessionId) -> Result<bool, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        match tables.sessions.get_mut(&id) {
            Some(session) if session.revoked_at.is_none() => {
                session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
