//! Analytics service.

use std::sync::Arc;

use pocketbook_shared::AnalyticsConfig;
use pocketbook_shared::types::UserId;

use super::buckets::{order_months, sort_categories};
use super::types::{CategoryTotal, MonthlyTotal};
use crate::ports::{LedgerStore, StoreError};

/// Aggregates a single user's ledger into buckets.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn LedgerStore>,
    config: AnalyticsConfig,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, config: AnalyticsConfig) -> Self {
        Self { store, config }
    }

    /// Net totals per UTC month, ordered per `analytics.month_order`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the aggregation query fails.
    pub async fn monthly_totals(&self, user_id: UserId) -> Result<Vec<MonthlyTotal>, StoreError> {
        let mut months = self.store.monthly_totals(user_id).await.inspect_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Monthly aggregation failed");
        })?;
        order_months(&mut months, self.config.month_order);
        Ok(months)
    }

    /// Net totals per category label, largest signed total first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the aggregation query fails.
    pub async fn category_totals(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CategoryTotal>, StoreError> {
        let mut categories = self.store.category_totals(user_id).await.inspect_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Category aggregation failed");
        })?;
        sort_categories(&mut categories);
        Ok(categories)
    }
}
