//! Pure bucketing and ordering of transactions.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use pocketbook_shared::MonthOrder;

use super::types::{CategoryTotal, MonthlyTotal};
use crate::ledger::Transaction;

/// Groups transactions by the UTC (year, month) of their date, ascending.
#[must_use]
pub fn bucket_by_month<'a, I>(transactions: I) -> Vec<MonthlyTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: BTreeMap<(i32, u32), (Decimal, i64)> = BTreeMap::new();
    for tx in transactions {
        let entry = buckets
            .entry((tx.date.year(), tx.date.month()))
            .or_insert((Decimal::ZERO, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), (total, count))| MonthlyTotal {
            year,
            month,
            total,
            count,
        })
        .collect()
}

/// Groups transactions by category label, in label order.
#[must_use]
pub fn bucket_by_category<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: BTreeMap<&str, (Decimal, i64)> = BTreeMap::new();
    for tx in transactions {
        let entry = buckets
            .entry(tx.category.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect()
}

/// Sorts monthly buckets chronologically in the requested direction.
pub fn order_months(months: &mut [MonthlyTotal], order: MonthOrder) {
    months.sort_by_key(|m| (m.year, m.month));
    if order == MonthOrder::Descending {
        months.reverse();
    }
}

/// Sorts category buckets by signed total descending, ties by label ascending.
pub fn sort_categories(categories: &mut [CategoryTotal]) {
    categories.sort_by(|a, b| match b.total.cmp(&a.total) {
        Ordering::Equal => a.category.cmp(&b.category),
        other => other,
    });
}
