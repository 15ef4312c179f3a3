//! Property-based tests for ledger validation.
//!
//! - The stored sign always follows the type, whatever sign the input carries
//! - Stored magnitude equals input magnitude
//! - Amounts with more than two decimal places never validate

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{TransactionDraft, TransactionType};
use super::validation::validate_draft;

/// Strategy to generate non-zero cent amounts of either sign.
fn signed_cents() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2)),
    ]
}

/// Strategy to generate a transaction type label with varied casing.
fn type_label() -> impl Strategy<Value = (TransactionType, String)> {
    prop_oneof![
        Just((TransactionType::Expense, "expense".to_string())),
        Just((TransactionType::Expense, "EXPENSE".to_string())),
        Just((TransactionType::Income, "income".to_string())),
        Just((TransactionType::Income, "Income".to_string())),
    ]
}

fn make_draft(amount: String, kind: String) -> TransactionDraft {
    TransactionDraft {
        amount: Some(amount),
        transaction_type: Some(kind),
        category: Some("Other".to_string()),
        description: Some("generated".to_string()),
        date: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Sign follows type and magnitude is preserved.
    #[test]
    fn prop_sign_follows_type(
        amount in signed_cents(),
        (kind, label) in type_label(),
    ) {
        let tx = validate_draft(&make_draft(amount.to_string(), label), Utc::now())
            .expect("valid draft");

        prop_assert_eq!(tx.transaction_type, kind);
        prop_assert_eq!(tx.amount.abs(), amount.abs());
        match kind {
            TransactionType::Expense => prop_assert!(tx.amount < Decimal::ZERO),
            TransactionType::Income => prop_assert!(tx.amount > Decimal::ZERO),
        }
    }

    /// Three significant decimal places are always rejected.
    #[test]
    fn prop_three_places_rejected(
        mills in 1i64..100_000_000i64,
        (_, label) in type_label(),
    ) {
        prop_assume!(mills % 10 != 0);
        let amount = Decimal::new(mills, 3);

        let result = validate_draft(&make_draft(amount.to_string(), label), Utc::now());
        prop_assert!(
            matches!(result, Err(LedgerError::TooManyDecimalPlaces)),
            "expected TooManyDecimalPlaces, got {:?}",
            result
        );
    }

    /// Free-form category text is trimmed and kept verbatim otherwise.
    #[test]
    fn prop_category_trimmed(name in "[A-Za-z][A-Za-z &-]{0,30}[A-Za-z]") {
        let mut draft = make_draft("10".to_string(), "expense".to_string());
        draft.category = Some(format!("  {name}  "));

        let tx = validate_draft(&draft, Utc::now()).expect("valid draft");
        prop_assert_eq!(tx.category, name);
    }
}
