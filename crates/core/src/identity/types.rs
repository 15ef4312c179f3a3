//! Identity domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use pocketbook_shared::auth::UserInfo;
use pocketbook_shared::types::{SessionId, UserId};

/// A registered user.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// Unique, lowercased email.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// University, if given.
    pub university: Option<String>,
    /// Expected monthly income, never negative.
    pub monthly_income: Decimal,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[hidden]")
            .field("university", &self.university)
            .field("monthly_income", &self.monthly_income)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl User {
    /// Public view of the user, without the password hash.
    #[must_use]
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id.into_inner(),
            username: self.username.clone(),
            email: self.email.clone(),
            university: self.university.clone(),
            monthly_income: self.monthly_income,
            created_at: self.created_at,
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Trimmed username.
    pub username: String,
    /// Trimmed, lowercased email.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Trimmed university; blank becomes `None`.
    pub university: Option<String>,
    /// Monthly income, defaulting to zero.
    pub monthly_income: Decimal,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Server-side session ID.
    pub session_id: SessionId,
    /// Signed session token.
    pub token: String,
    /// Session expiry.
    pub expires_at: DateTime<Utc>,
}

/// Caller identity resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Acting user.
    pub user_id: UserId,
    /// Session the token belongs to.
    pub session_id: SessionId,
    /// Username, for log context.
    pub username: String,
}
