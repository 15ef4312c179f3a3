//! Category types.

use serde::{Deserialize, Serialize};

use pocketbook_shared::types::{CategoryId, UserId};

use crate::ledger::TransactionType;

/// A spending or income category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Owner; `None` for system defaults.
    pub user_id: Option<UserId>,
    /// Display name, unique per (owner, type).
    pub name: String,
    /// Whether the category applies to expenses or income.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Material icon name.
    pub icon: Option<String>,
    /// `#RRGGBB` color.
    pub color: Option<String>,
}

impl Category {
    /// True for system defaults visible to every user.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.user_id.is_none()
    }
}

/// Raw input for a user-defined category.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    /// Display name.
    pub name: Option<String>,
    /// `expense` or `income`.
    pub kind: Option<String>,
    /// Icon name.
    pub icon: Option<String>,
    /// `#RRGGBB` color.
    pub color: Option<String>,
}
