//! Integration tests for the transaction repository and SQL aggregations.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pocketbook_core::ledger::{Transaction, TransactionType};
use pocketbook_core::ports::LedgerStore;
use pocketbook_db::TransactionRepository;
use pocketbook_shared::types::{TransactionId, UserId};

fn transaction(
    user_id: UserId,
    amount: Decimal,
    category: &str,
    date: DateTime<Utc>,
) -> Transaction {
    let transaction_type = if amount > Decimal::ZERO {
        TransactionType::Income
    } else {
        TransactionType::Expense
    };
    Transaction {
        id: TransactionId::new(),
        user_id,
        amount,
        transaction_type,
        category: category.to_string(),
        description: "integration".to_string(),
        date,
        created_at: Utc::now(),
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_find_by_user_newest_first_with_limit() {
    let db = common::setup().await;
    let repo = TransactionRepository::new(db.clone());
    let user = common::create_test_user(&db).await;

    for day in [1, 3, 2] {
        let date = Utc.with_ymd_and_hms(2024, 4, day, 10, 0, 0).unwrap();
        repo.insert(&transaction(user.id, dec!(-5.00), "Food", date))
            .await
            .unwrap();
    }

    let all = repo.find_by_user(user.id, None).await.unwrap();
    let dates: Vec<_> = all.iter().map(|t| t.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(all.len(), 3);

    let limited = repo.find_by_user(user.id, Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_delete_owned_scoped_by_user() {
    let db = common::setup().await;
    let repo = TransactionRepository::new(db.clone());
    let owner = common::create_test_user(&db).await;
    let other = common::create_test_user(&db).await;

    let tx = transaction(owner.id, dec!(-12.50), "Food", Utc::now());
    repo.insert(&tx).await.unwrap();

    assert!(!repo.delete_owned(tx.id, other.id).await.unwrap());
    assert!(repo.delete_owned(tx.id, owner.id).await.unwrap());
    assert!(!repo.delete_owned(tx.id, owner.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_monthly_and_category_totals() {
    let db = common::setup().await;
    let repo = TransactionRepository::new(db.clone());
    let user = common::create_test_user(&db).await;

    let jan = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
    let feb = Utc.with_ymd_and_hms(2024, 2, 2, 8, 0, 0).unwrap();
    repo.insert(&transaction(user.id, dec!(50.00), "Scholarships", jan))
        .await
        .unwrap();
    repo.insert(&transaction(user.id, dec!(-20.00), "Food", jan))
        .await
        .unwrap();
    repo.insert(&transaction(user.id, dec!(-5.00), "Food", feb))
        .await
        .unwrap();

    let months = repo.monthly_totals(user.id).await.unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!((months[0].year, months[0].month), (2024, 1));
    assert_eq!(months[0].total, dec!(30.00));
    assert_eq!(months[0].count, 2);
    assert_eq!(months[1].total, dec!(-5.00));

    let mut categories = repo.category_totals(user.id).await.unwrap();
    categories.sort_by(|a, b| a.category.cmp(&b.category));
    assert_eq!(categories[0].category, "Food");
    assert_eq!(categories[0].total, dec!(-25.00));
    assert_eq!(categories[0].count, 2);
    assert_eq!(categories[1].total, dec!(50.00));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_empty_ledger_aggregates_empty() {
    let db = common::setup().await;
    let repo = TransactionRepository::new(db.clone());
    let user = common::create_test_user(&db).await;

    assert!(repo.monthly_totals(user.id).await.unwrap().is_empty());
    assert!(repo.category_totals(user.id).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_concurrent_inserts_all_visible() {
    use futures::future::join_all;

    let db = common::setup().await;
    let repo = TransactionRepository::new(db.clone());
    let user = common::create_test_user(&db).await;
    let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

    let records: Vec<Transaction> = (1..=10)
        .map(|i| transaction(user.id, Decimal::new(-i, 0), "Food", date))
        .collect();
    let results = join_all(records.iter().map(|t| repo.insert(t))).await;
    assert!(results.iter().all(Result::is_ok));

    let listed = repo.find_by_user(user.id, None).await.unwrap();
    assert_eq!(listed.len(), 10);

    let totals = repo.category_totals(user.id).await.unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total, dec!(-55));
    assert_eq!(totals[0].count, 10);
}
