//! Authentication types for session tokens and auth payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Server-side session this token belongs to.
    pub sid: Uuid,
    /// Username, for log context.
    pub username: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user session.
    #[must_use]
    pub fn new(user_id: Uuid, session_id: Uuid, username: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            sid: session_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the session ID from claims.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.sid
    }
}

/// Login request payload.
///
/// Fields are optional so that missing input surfaces as a validation error
/// instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// User email.
    pub email: Option<String>,
    /// User password.
    pub password: Option<String>,
}

/// Registration request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    /// Unique username.
    pub username: Option<String>,
    /// Unique email.
    pub email: Option<String>,
    /// User password.
    pub password: Option<String>,
    /// Password confirmation; must match `password` when present.
    pub confirm_password: Option<String>,
    /// University the student attends.
    pub university: Option<String>,
    /// Expected monthly income.
    pub monthly_income: Option<Decimal>,
}

/// Registration response payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    /// Created user ID.
    pub user_id: Uuid,
    /// Human-readable message.
    pub message: String,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Authenticated user info.
    pub user: UserInfo,
    /// Session token (also set as a cookie).
    pub token: String,
    /// Session expiry.
    pub expires_at: DateTime<Utc>,
}

/// User info returned in auth responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// University, if given at registration.
    pub university: Option<String>,
    /// Expected monthly income.
    pub monthly_income: Decimal,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
