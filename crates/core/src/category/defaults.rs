//! The system-default category set.

use pocketbook_shared::types::CategoryId;

use super::types::Category;
use crate::ledger::TransactionType;

/// (name, icon, color) for default expense categories.
pub const DEFAULT_EXPENSE_CATEGORIES: [(&str, &str, &str); 10] = [
    ("Food & Dining", "restaurant", "#FF5722"),
    ("Transportation", "directions_bus", "#3F51B5"),
    ("Books & Supplies", "book", "#009688"),
    ("Entertainment", "movie", "#E91E63"),
    ("Housing", "home", "#795548"),
    ("Utilities", "power", "#FFC107"),
    ("Clothing", "shopping_bag", "#9C27B0"),
    ("Health", "local_hospital", "#F44336"),
    ("Personal", "person", "#607D8B"),
    ("Other", "more_horiz", "#9E9E9E"),
];

/// (name, icon, color) for default income categories.
pub const DEFAULT_INCOME_CATEGORIES: [(&str, &str, &str); 5] = [
    ("Scholarships", "school", "#4CAF50"),
    ("Part-time Job", "work", "#2196F3"),
    ("Allowance", "attach_money", "#FFEB3B"),
    ("Grants", "card_giftcard", "#00BCD4"),
    ("Other Income", "add", "#8BC34A"),
];

/// Builds the full default set as unowned categories.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    let expense = DEFAULT_EXPENSE_CATEGORIES
        .iter()
        .map(|entry| (TransactionType::Expense, entry));
    let income = DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|entry| (TransactionType::Income, entry));

    expense
        .chain(income)
        .map(|(kind, (name, icon, color))| Category {
            id: CategoryId::new(),
            user_id: None,
            name: (*name).to_string(),
            kind,
            icon: Some((*icon).to_string()),
            color: Some((*color).to_string()),
        })
        .collect()
}
