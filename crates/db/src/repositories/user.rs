//! User repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use pocketbook_core::identity::User;
use pocketbook_core::ports::UserStore;
use pocketbook_core::StoreError;
use pocketbook_shared::types::UserId;

use crate::entities::users;
use crate::error::store_error;

/// User repository backed by the `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: UserId::from_uuid(model.id),
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            university: model.university,
            monthly_income: model.monthly_income,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        users::ActiveModel {
            id: Set(user.id.into_inner()),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            university: Set(user.university.clone()),
            monthly_income: Set(user.monthly_income),
            created_at: Set(user.created_at.into()),
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|m| m.map(User::from))
            .map_err(store_error)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map(|m| m.map(User::from))
            .map_err(store_error)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map(|m| m.map(User::from))
            .map_err(store_error)
    }
}
