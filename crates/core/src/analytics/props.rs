//! Property-based tests for bucketing.
//!
//! - Bucket totals and counts add up to the ledger's net sum and size
//! - Category ordering is a total order: descending total, then label

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use pocketbook_shared::MonthOrder;
use pocketbook_shared::types::{TransactionId, UserId};

use super::buckets::{bucket_by_category, bucket_by_month, order_months, sort_categories};
use crate::ledger::{Transaction, TransactionType};

/// Strategy to generate one signed transaction within 2023..=2025.
fn transaction() -> impl Strategy<Value = Transaction> {
    (
        1i64..1_000_000i64,
        any::<bool>(),
        prop_oneof![Just("Food"), Just("Rent"), Just("Books"), Just("Allowance")],
        2023i32..=2025,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(cents, income, category, year, month, day)| {
            let kind = if income {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            let date = Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap();
            Transaction {
                id: TransactionId::new(),
                user_id: UserId::new(),
                amount: kind.signed(Decimal::new(cents, 2)),
                transaction_type: kind,
                category: category.to_string(),
                description: String::new(),
                date,
                created_at: date,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Monthly and category buckets both partition the ledger.
    #[test]
    fn prop_buckets_partition_ledger(txs in prop::collection::vec(transaction(), 0..40)) {
        let net: Decimal = txs.iter().map(|t| t.amount).sum();
        let size = i64::try_from(txs.len()).unwrap();

        let months = bucket_by_month(&txs);
        prop_assert_eq!(months.iter().map(|m| m.total).sum::<Decimal>(), net);
        prop_assert_eq!(months.iter().map(|m| m.count).sum::<i64>(), size);

        let cats = bucket_by_category(&txs);
        prop_assert_eq!(cats.iter().map(|c| c.total).sum::<Decimal>(), net);
        prop_assert_eq!(cats.iter().map(|c| c.count).sum::<i64>(), size);
    }

    /// Months come out strictly chronological in either direction.
    #[test]
    fn prop_month_order_strict(txs in prop::collection::vec(transaction(), 0..40)) {
        let mut months = bucket_by_month(&txs);
        order_months(&mut months, MonthOrder::Ascending);
        prop_assert!(months.windows(2).all(|w| (w[0].year, w[0].month) < (w[1].year, w[1].month)));

        order_months(&mut months, MonthOrder::Descending);
        prop_assert!(months.windows(2).all(|w| (w[0].year, w[0].month) > (w[1].year, w[1].month)));
    }

    /// Category totals never increase along the sorted list.
    #[test]
    fn prop_category_sort(txs in prop::collection::vec(transaction(), 0..40)) {
        let mut cats = bucket_by_category(&txs);
        sort_categories(&mut cats);
        let sorted = cats.windows(2).all(|w| {
            w[0].total > w[1].total || (w[0].total == w[1].total && w[0].category < w[1].category)
        });
        prop_assert!(sorted);
    }
}
