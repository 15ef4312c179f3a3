//! Registration and login input checks.

use rust_decimal::Decimal;

use pocketbook_shared::auth::RegisterRequest;

use super::error::IdentityError;
use super::types::Registration;
use crate::ledger::validation::{AMOUNT_LIMIT, MAX_AMOUNT_SCALE};

/// Minimum username length in characters.
pub const MIN_USERNAME_LEN: usize = 3;
/// Maximum username length in characters.
pub const MAX_USERNAME_LEN: usize = 50;
/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Maximum university length in characters.
pub const MAX_UNIVERSITY_LEN: usize = 100;
/// Maximum email length in characters.
pub const MAX_EMAIL_LEN: usize = 255;

/// Lowercases and trims an email for storage and lookup.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn present<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, IdentityError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(IdentityError::Validation(format!("{field} is required"))),
    }
}

/// Validates a registration request.
///
/// # Errors
///
/// Returns `IdentityError::Validation` naming the first offending field.
pub fn validate_registration(req: &RegisterRequest) -> Result<Registration, IdentityError> {
    let username = present(req.username.as_deref(), "username")?;
    let email = present(req.email.as_deref(), "email")?;
    // Passwords are not trimmed; only presence is checked on the trimmed value.
    present(req.password.as_deref(), "password")?;
    let password = req.password.clone().unwrap_or_default();

    let username_len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username_len) {
        return Err(IdentityError::Validation(format!(
            "username must be between {MIN_USERNAME_LEN} and {MAX_USERNAME_LEN} characters"
        )));
    }

    let email = normalize_email(email);
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(IdentityError::Validation("email is not valid".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(IdentityError::Validation(format!(
            "email cannot exceed {MAX_EMAIL_LEN} characters"
        )));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(IdentityError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    if let Some(confirm) = &req.confirm_password {
        if *confirm != password {
            return Err(IdentityError::Validation(
                "passwords do not match".to_string(),
            ));
        }
    }

    let university = req
        .university
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string);
    if university
        .as_ref()
        .is_some_and(|u| u.chars().count() > MAX_UNIVERSITY_LEN)
    {
        return Err(IdentityError::Validation(format!(
            "university cannot exceed {MAX_UNIVERSITY_LEN} characters"
        )));
    }

    let mut monthly_income = req.monthly_income.unwrap_or(Decimal::ZERO).normalize();
    if monthly_income.is_sign_negative() && !monthly_income.is_zero() {
        return Err(IdentityError::Validation("monthly_income cannot be negative".to_string()));
    }
    if monthly_income.scale() > MAX_AMOUNT_SCALE {
        return Err(IdentityError::Validation(format!(
            "monthly_income cannot have more than {MAX_AMOUNT_SCALE} decimal places"
        )));
    }
    if monthly_income >= AMOUNT_LIMIT {
        return Err(IdentityError::Validation("monthly_income is out of range".to_string()));
    }
    monthly_income.rescale(MAX_AMOUNT_SCALE);

    Ok(Registration {
        username: username.to_string(),
        email,
        password,
        university,
        monthly_income,
    })
}

/// Checks that both login fields are present and returns them, email normalized.
///
/// # Errors
///
/// Returns `IdentityError::Validation` if either field is missing or blank.
pub fn validate_login(
    email: Option<&str>,
    password: Option<&str>,
) -> Result<(String, String), IdentityError> {
    match (email.map(str::trim), password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => {
            Ok((normalize_email(e), p.to_string()))
        }
        _ => Err(IdentityError::Validation(
            "email and password are required".to_string(),
        )),
    }
}
