//! Transaction repository for database operations.
//!
//! Aggregations run as SQL `GROUP BY` queries; bucketing is done by the
//! database, ordering by the analytics service.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, Set, Statement,
};

use pocketbook_core::analytics::{CategoryTotal, MonthlyTotal};
use pocketbook_core::ledger::{Transaction, TransactionType};
use pocketbook_core::ports::LedgerStore;
use pocketbook_core::StoreError;
use pocketbook_shared::types::{TransactionId, UserId};

use crate::entities::transactions;
use crate::error::store_error;

const MONTHLY_TOTALS_SQL: &str = r"
SELECT
    CAST(EXTRACT(YEAR FROM date AT TIME ZONE 'UTC') AS INTEGER) AS year,
    CAST(EXTRACT(MONTH FROM date AT TIME ZONE 'UTC') AS INTEGER) AS month,
    SUM(amount) AS total,
    COUNT(*) AS count
FROM transactions
WHERE user_id = $1
GROUP BY 1, 2
ORDER BY 1, 2
";

const CATEGORY_TOTALS_SQL: &str = r"
SELECT
    category,
    SUM(amount) AS total,
    COUNT(*) AS count
FROM transactions
WHERE user_id = $1
GROUP BY category
";

#[derive(Debug, FromQueryResult)]
struct MonthlyRow {
    year: i32,
    month: i32,
    total: Decimal,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: String,
    total: Decimal,
    count: i64,
}

/// Transaction repository backed by the `transactions` table.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TryFrom<transactions::Model> for Transaction {
    type Error = StoreError;

    fn try_from(model: transactions::Model) -> Result<Self, Self::Error> {
        let transaction_type =
            TransactionType::from_str(&model.transaction_type).map_err(StoreError::query)?;

        Ok(Self {
            id: TransactionId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            amount: model.amount,
            transaction_type,
            category: model.category,
            description: model.description,
            date: model.date.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl LedgerStore for TransactionRepository {
    async fn insert(&self, transaction: &Transaction) -> Result<(), StoreError> {
        transactions::ActiveModel {
            id: Set(transaction.id.into_inner()),
            user_id: Set(transaction.user_id.into_inner()),
            amount: Set(transaction.amount),
            transaction_type: Set(transaction.transaction_type.as_str().to_string()),
            category: Set(transaction.category.clone()),
            description: Set(transaction.description.clone()),
            date: Set(transaction.date.into()),
            created_at: Set(transaction.created_at.into()),
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<Transaction>, StoreError> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    async fn delete_owned(&self, id: TransactionId, user_id: UserId) -> Result<bool, StoreError> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(id.into_inner()))
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn monthly_totals(&self, user_id: UserId) -> Result<Vec<MonthlyTotal>, StoreError> {
        let rows = MonthlyRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            MONTHLY_TOTALS_SQL,
            [user_id.into_inner().into()],
        ))
        .all(&self.db)
        .await
        .map_err(store_error)?;

        rows.into_iter()
            .map(|row| {
                let month = u32::try_from(row.month)
                    .map_err(|_| StoreError::query(format!("invalid month {}", row.month)))?;
                Ok(MonthlyTotal {
                    year: row.year,
                    month,
                    total: row.total,
                    count: row.count,
                })
            })
            .collect()
    }

    async fn category_totals(&self, user_id: UserId) -> Result<Vec<CategoryTotal>, StoreError> {
        let rows = CategoryRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            CATEGORY_TOTALS_SQL,
            [user_id.into_inner().into()],
        ))
        .all(&self.db)
        .await
        .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryTotal {
                category: row.category,
                total: row.total,
                count: row.count,
            })
            .collect())
    }
}
