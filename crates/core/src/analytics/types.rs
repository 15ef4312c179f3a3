//! Analytics bucket types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net total for one calendar month (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 to 12.
    pub month: u32,
    /// Net signed sum of the month's transactions.
    pub total: Decimal,
    /// Number of transactions in the month.
    pub count: i64,
}

/// Net total for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label.
    pub category: String,
    /// Net signed sum of the category's transactions.
    pub total: Decimal,
    /// Number of transactions with this label.
    pub count: i64,
}
