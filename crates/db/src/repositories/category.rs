//! Category repository for database operations.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend,
    EntityTrait, QueryFilter, QueryOrder, Set, Statement,
};

use pocketbook_core::category::Category;
use pocketbook_core::ledger::TransactionType;
use pocketbook_core::ports::CategoryStore;
use pocketbook_core::StoreError;
use pocketbook_shared::types::{CategoryId, UserId};

use crate::entities::categories;
use crate::error::store_error;

const UPSERT_DEFAULT_SQL: &str = r"
INSERT INTO categories (id, user_id, name, type, icon, color)
VALUES ($1, NULL, $2, $3, $4, $5)
ON CONFLICT ON CONSTRAINT uq_categories_owner_name_type
DO UPDATE SET icon = EXCLUDED.icon, color = EXCLUDED.color
";

/// Category repository backed by the `categories` table.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TryFrom<categories::Model> for Category {
    type Error = StoreError;

    fn try_from(model: categories::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::from_uuid(model.id),
            user_id: model.user_id.map(UserId::from_uuid),
            name: model.name,
            kind: TransactionType::from_str(&model.kind).map_err(StoreError::query)?,
            icon: model.icon,
            color: model.color,
        })
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), StoreError> {
        categories::ActiveModel {
            id: Set(category.id.into_inner()),
            user_id: Set(category.user_id.map(UserId::into_inner)),
            name: Set(category.name.clone()),
            kind: Set(category.kind.as_str().to_string()),
            icon: Set(category.icon.clone()),
            color: Set(category.color.clone()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn upsert_default(&self, category: &Category) -> Result<(), StoreError> {
        self.db
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                UPSERT_DEFAULT_SQL,
                [
                    category.id.into_inner().into(),
                    category.name.clone().into(),
                    category.kind.as_str().into(),
                    category.icon.clone().into(),
                    category.color.clone().into(),
                ],
            ))
            .await
            .map_err(store_error)?;

        Ok(())
    }

    async fn list_visible(
        &self,
        user_id: UserId,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, StoreError> {
        let mut query = categories::Entity::find().filter(
            Condition::any()
                .add(categories::Column::UserId.is_null())
                .add(categories::Column::UserId.eq(user_id.into_inner())),
        );
        if let Some(kind) = kind {
            query = query.filter(categories::Column::Kind.eq(kind.as_str()));
        }

        query
            .order_by_asc(categories::Column::Kind)
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }
}
