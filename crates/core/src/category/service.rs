//! Category service.

use std::sync::Arc;

use pocketbook_shared::types::{CategoryId, UserId};

use super::defaults::default_categories;
use super::error::CategoryError;
use super::types::{Category, NewCategory};
use super::validation::validate_category;
use crate::ledger::TransactionType;
use crate::ports::{CategoryStore, StoreError};

/// Registry of default and user-defined categories.
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    /// Creates a new category service.
    #[must_use]
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Upserts the default category set. Safe to run repeatedly.
    ///
    /// Returns the number of defaults written.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Storage` on the first failed upsert.
    pub async fn seed_defaults(&self) -> Result<usize, CategoryError> {
        let defaults = default_categories();
        for category in &defaults {
            self.store.upsert_default(category).await.inspect_err(|e| {
                tracing::error!(name = %category.name, error = %e, "Failed to upsert default category");
            })?;
        }

        tracing::info!(count = defaults.len(), "Default categories seeded");
        Ok(defaults.len())
    }

    /// System defaults plus the user's own categories, by type then name.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Storage` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, CategoryError> {
        Ok(self.store.list_visible(user_id, kind).await?)
    }

    /// Creates a category owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Validation` for bad input, or
    /// `CategoryError::Duplicate` if the user already has one with this
    /// name and type.
    pub async fn create(
        &self,
        user_id: UserId,
        input: &NewCategory,
    ) -> Result<Category, CategoryError> {
        let valid = validate_category(input)?;
        let category = Category {
            id: CategoryId::new(),
            user_id: Some(user_id),
            name: valid.name,
            kind: valid.kind,
            icon: valid.icon,
            color: valid.color,
        };

        self.store.insert(&category).await.map_err(|e| match e {
            StoreError::Duplicate { .. } => CategoryError::Duplicate(category.name.clone()),
            other => {
                tracing::error!(user_id = %user_id, error = %other, "Failed to insert category");
                CategoryError::Storage(other)
            }
        })?;

        tracing::info!(user_id = %user_id, category_id = %category.id, "Category created");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;

    fn input(name: &str, kind: &str) -> NewCategory {
        NewCategory {
            name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            icon: None,
            color: None,
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = Arc::new(InMemoryStore::new());
        let service = CategoryService::new(store);
        let user = UserId::new();

        assert_eq!(service.seed_defaults().await.unwrap(), 15);
        service.seed_defaults().await.unwrap();

        let all = service.list_for_user(user, None).await.unwrap();
        assert_eq!(all.len(), 15);
    }

    #[tokio::test]
    async fn test_list_includes_own_and_filters_type() {
        let store = Arc::new(InMemoryStore::new());
        let service = CategoryService::new(store);
        let alice = UserId::new();
        let bob = UserId::new();
        service.seed_defaults().await.unwrap();

        service.create(alice, &input("Coffee", "expense")).await.unwrap();
        service.create(bob, &input("Tutoring", "income")).await.unwrap();

        let expenses = service
            .list_for_user(alice, Some(TransactionType::Expense))
            .await
            .unwrap();
        assert_eq!(expenses.len(), 11);
        assert!(expenses.iter().all(|c| c.kind == TransactionType::Expense));
        assert!(expenses.iter().any(|c| c.name == "Coffee"));

        let income = service
            .list_for_user(alice, Some(TransactionType::Income))
            .await
            .unwrap();
        assert!(income.iter().all(|c| c.name != "Tutoring"));
    }

    #[tokio::test]
    async fn test_list_ordered_by_type_then_name() {
        let store = Arc::new(InMemoryStore::new());
        let service = CategoryService::new(store);
        service.seed_defaults().await.unwrap();

        let all = service.list_for_user(UserId::new(), None).await.unwrap();
        let keys: Vec<_> = all.iter().map(|c| (c.kind, c.name.clone())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn test_duplicate_per_user_and_type() {
        let store = Arc::new(InMemoryStore::new());
        let service = CategoryService::new(store);
        let user = UserId::new();

        service.create(user, &input("Coffee", "expense")).await.unwrap();
        let err = service
            .create(user, &input("Coffee", "expense"))
            .await
            .unwrap_err();
        assert!(matches!(err, CategoryError::Duplicate(ref n) if n == "Coffee"));

        service.create(user, &input("Coffee", "income")).await.unwrap();
        service
            .create(UserId::new(), &input("Coffee", "expense"))
            .await
            .unwrap();
    }
}
