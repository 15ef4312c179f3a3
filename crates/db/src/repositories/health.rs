//! Database liveness probe.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use pocketbook_core::ports::HealthCheck;
use pocketbook_core::StoreError;

use crate::error::store_error;

/// Pings the pooled connection.
#[derive(Debug, Clone)]
pub struct DatabaseHealth {
    db: DatabaseConnection,
}

impl DatabaseHealth {
    /// Creates a new health probe.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthCheck for DatabaseHealth {
    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await.map_err(store_error)
    }
}
