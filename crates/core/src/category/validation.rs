//! Category input checks.

use std::str::FromStr;

use super::error::CategoryError;
use super::types::NewCategory;
use crate::ledger::TransactionType;

/// Maximum characters in a category name.
pub const MAX_NAME_LEN: usize = 50;
/// Maximum characters in an icon name.
pub const MAX_ICON_LEN: usize = 50;

/// Validated category fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCategory {
    /// Trimmed name.
    pub name: String,
    /// Parsed type.
    pub kind: TransactionType,
    /// Trimmed icon, blank dropped.
    pub icon: Option<String>,
    /// Uppercased `#RRGGBB`.
    pub color: Option<String>,
}

/// True for `#RRGGBB` with hex digits of either case.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validates a new user category.
///
/// # Errors
///
/// Returns `CategoryError::Validation` naming the offending field.
pub fn validate_category(input: &NewCategory) -> Result<ValidCategory, CategoryError> {
    let name = non_blank(input.name.as_deref())
        .ok_or_else(|| CategoryError::Validation("name is required".to_string()))?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CategoryError::Validation(format!(
            "name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }

    let kind = input
        .kind
        .as_deref()
        .ok_or_else(|| CategoryError::Validation("type is required".to_string()))
        .and_then(|raw| {
            TransactionType::from_str(raw).map_err(|_| {
                CategoryError::Validation("type must be 'expense' or 'income'".to_string())
            })
        })?;

    let icon = non_blank(input.icon.as_deref());
    if icon.as_ref().is_some_and(|i| i.chars().count() > MAX_ICON_LEN) {
        return Err(CategoryError::Validation(format!(
            "icon cannot exceed {MAX_ICON_LEN} characters"
        )));
    }

    let color = non_blank(input.color.as_deref());
    if let Some(c) = &color {
        if !is_hex_color(c) {
            return Err(CategoryError::Validation(
                "color must look like #RRGGBB".to_string(),
            ));
        }
    }

    Ok(ValidCategory {
        name,
        kind,
        icon,
        color: color.map(|c| c.to_uppercase()),
    })
}
