//! Session repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use pocketbook_core::identity::Session;
use pocketbook_core::ports::SessionStore;
use pocketbook_core::StoreError;
use pocketbook_shared::types::{SessionId, UserId};

use crate::entities::sessions;
use crate::error::store_error;

/// Session repository backed by the `sessions` table.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes sessions that expired before `cutoff`. Returns rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        sessions::Entity::delete_many()
            .filter(sessions::Column::ExpiresAt.lt(cutoff))
            .exec(&self.db)
            .await
            .map(|res| res.rows_affected)
            .map_err(store_error)
    }
}

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: SessionId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            token_hash: model.token_hash,
            expires_at: model.expires_at.with_timezone(&Utc),
            revoked_at: model.revoked_at.map(|t| t.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), StoreError> {
        sessions::ActiveModel {
            id: Set(session.id.into_inner()),
            user_id: Set(session.user_id.into_inner()),
            token_hash: Set(session.token_hash.clone()),
            expires_at: Set(session.expires_at.into()),
            revoked_at: Set(session.revoked_at.map(Into::into)),
            created_at: Set(session.created_at.into()),
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn find_active(
        &self,
        id: SessionId,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, StoreError> {
        sessions::Entity::find_by_id(id.into_inner())
            .filter(sessions::Column::RevokedAt.is_null())
            .filter(sessions::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .map(|m| m.map(Session::from))
            .map_err(store_error)
    }

    async fn revoke(&self, id: SessionId) -> Result<bool, StoreError> {
        let result = sessions::Entity::update_many()
            .col_expr(sessions::Column::RevokedAt, Expr::value(Utc::now()))
            .filter(sessions::Column::Id.eq(id.into_inner()))
            .filter(sessions::Column::RevokedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }
}
