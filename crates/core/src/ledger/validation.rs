//! Business rule validation for ledger input.
//!
//! Turns a [`TransactionDraft`] into a [`NewTransaction`] whose amount sign
//! agrees with its type.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{NewTransaction, TransactionDraft, TransactionType};

/// Maximum characters in a category label.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Maximum characters in a description.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Maximum decimal places accepted for an amount.
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Amounts must stay strictly below this magnitude (fits NUMERIC(14, 2)).
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Validates a draft and normalizes it for storage.
///
/// `now` is used when the draft carries no date.
///
/// # Errors
///
/// Returns the first [`LedgerError`] found, checking fields in the order
/// amount, type, category, description, date.
pub fn validate_draft(
    draft: &TransactionDraft,
    now: DateTime<Utc>,
) -> Result<NewTransaction, LedgerError> {
    let magnitude = parse_amount(required(draft.amount.as_deref(), "amount")?)?;
    let transaction_type = parse_type(required(draft.transaction_type.as_deref(), "type")?)?;
    let category = validate_category(required(draft.category.as_deref(), "category")?)?;
    let description = validate_description(required(draft.description.as_deref(), "description")?)?;

    let date = match draft.date.as_deref().map(str::trim) {
        None | Some("") => now,
        Some(raw) => parse_date(raw)?,
    };

    Ok(NewTransaction {
        amount: transaction_type.signed(magnitude),
        transaction_type,
        category,
        description,
        date,
    })
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, LedgerError> {
    value.ok_or(LedgerError::MissingField(field))
}

/// Parses an amount, returning its non-negative magnitude with two decimal places.
///
/// # Errors
///
/// Rejects non-numeric input, zero, more than two decimal places and
/// magnitudes at or above [`AMOUNT_LIMIT`].
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField("amount"));
    }

    let parsed = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))?;

    let mut magnitude = parsed.abs().normalize();
    if magnitude.is_zero() {
        return Err(LedgerError::ZeroAmount);
    }
    if magnitude.scale() > MAX_AMOUNT_SCALE {
        return Err(LedgerError::TooManyDecimalPlaces);
    }
    if magnitude >= AMOUNT_LIMIT {
        return Err(LedgerError::AmountOutOfRange);
    }

    magnitude.rescale(MAX_AMOUNT_SCALE);
    Ok(magnitude)
}

/// Parses a transaction type, case-insensitively.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidType`] for anything but `expense` or `income`.
pub fn parse_type(raw: &str) -> Result<TransactionType, LedgerError> {
    TransactionType::from_str(raw).map_err(|_| LedgerError::InvalidType(raw.trim().to_string()))
}

fn validate_category(raw: &str) -> Result<String, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::BlankCategory);
    }
    if trimmed.chars().count() > MAX_CATEGORY_LEN {
        return Err(LedgerError::CategoryTooLong {
            max: MAX_CATEGORY_LEN,
        });
    }
    Ok(trimmed.to_string())
}

fn validate_description(raw: &str) -> Result<String, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(LedgerError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// Parses a transaction date.
///
/// Accepts RFC 3339 (any offset, converted to UTC), a bare `YYYY-MM-DD`
/// (midnight UTC) or a naive `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDate`] when no format matches.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, LedgerError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| LedgerError::InvalidDate(raw.to_string()))
}

/// Resolves the number of records a listing returns.
///
/// `None` falls back to `default_limit`, where `0` means unbounded. Explicit
/// limits are capped at `max_limit`.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidLimit`] for an explicit limit of zero.
pub fn effective_limit(
    requested: Option<u64>,
    default_limit: u64,
    max_limit: u64,
) -> Result<Option<u64>, LedgerError> {
    match requested {
        Some(0) => Err(LedgerError::InvalidLimit),
        Some(n) => Ok(Some(n.min(max_limit))),
        None if default_limit == 0 => Ok(None),
        None => Ok(Some(default_limit)),
    }
}
