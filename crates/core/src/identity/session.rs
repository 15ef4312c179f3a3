//! Server-side login sessions.
//!
//! The session row stores only a SHA-256 fingerprint of the token it was
//! issued with.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use pocketbook_shared::types::{SessionId, UserId};

/// A login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session ID, carried in the token's `sid` claim.
    pub id: SessionId,
    /// Session owner.
    pub user_id: UserId,
    /// Hex SHA-256 of the issued token.
    pub token_hash: String,
    /// Hard expiry.
    pub expires_at: DateTime<Utc>,
    /// Set on logout.
    pub revoked_at: Option<DateTime<Utc>>,
    /// Login time.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// True when the session is neither revoked nor expired at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

/// Hex-encoded SHA-256 of a session token.
#[must_use]
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
