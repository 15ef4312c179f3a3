//! Identity service: registration, login, session checks and logout.

use std::sync::Arc;

use chrono::Utc;

use pocketbook_shared::JwtService;
use pocketbook_shared::auth::RegisterRequest;
use pocketbook_shared::types::{SessionId, UserId};

use super::error::IdentityError;
use super::password::{hash_password_blocking, verify_password_blocking};
use super::session::{Session, hash_token};
use super::types::{AuthenticatedUser, LoginOutcome, User};
use super::validation::{validate_login, validate_registration};
use crate::ports::{SessionStore, UserStore};

/// Identity service.
#[derive(Clone)]
pub struct IdentityService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    jwt: Arc<JwtService>,
}

impl IdentityService {
    /// Creates a new identity service.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            users,
            sessions,
            jwt,
        }
    }

    /// Registers a new user.
    ///
    /// Uniqueness is enforced by the store; there is no separate existence
    /// check before the insert.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Validation` for bad input,
    /// `IdentityError::Duplicate` if the username or email is taken.
    pub async fn register(&self, req: &RegisterRequest) -> Result<User, IdentityError> {
        let registration = validate_registration(req)?;
        let password_hash = hash_password_blocking(registration.password).await?;

        let user = User {
            id: UserId::new(),
            username: registration.username,
            email: registration.email,
            password_hash,
            university: registration.university,
            monthly_income: registration.monthly_income,
            created_at: Utc::now(),
        };

        self.users.insert(&user).await.map_err(|e| {
            let err = IdentityError::from(e);
            match &err {
                IdentityError::Duplicate(field) => {
                    tracing::info!(field = %field, "Registration rejected: duplicate");
                }
                other => tracing::error!(error = %other, "Failed to insert user"),
            }
            err
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidCredentials` for an unknown email or a
    /// wrong password alike.
    pub async fn verify_credentials(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, IdentityError> {
        let (email, password) = validate_login(email, password)?;

        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::debug!("Login failed: unknown email");
            return Err(IdentityError::InvalidCredentials);
        };

        if verify_password_blocking(password, user.password_hash.clone()).await? {
            Ok(user)
        } else {
            tracing::debug!(user_id = %user.id, "Login failed: wrong password");
            Err(IdentityError::InvalidCredentials)
        }
    }

    /// Logs a user in, opening a server-side session and signing its token.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidCredentials` if the credentials do not
    /// match, or a storage/token error if the session cannot be opened.
    pub async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginOutcome, IdentityError> {
        let user = self.verify_credentials(email, password).await?;

        let session_id = SessionId::new();
        let issued = self.jwt.generate_session_token(
            user.id.into_inner(),
            session_id.into_inner(),
            &user.username,
        )?;

        let session = Session {
            id: session_id,
            user_id: user.id,
            token_hash: hash_token(&issued.token),
            expires_at: issued.expires_at,
            revoked_at: None,
            created_at: Utc::now(),
        };
        self.sessions.insert(&session).await?;

        tracing::info!(user_id = %user.id, session_id = %session_id, "User logged in");

        Ok(LoginOutcome {
            user,
            session_id,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Resolves a session token to the acting user.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::SessionInvalid` if the token is malformed,
    /// expired, revoked or does not match its session row.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, IdentityError> {
        let claims = self.jwt.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            IdentityError::SessionInvalid
        })?;

        let session_id = SessionId::from_uuid(claims.session_id());
        let user_id = UserId::from_uuid(claims.user_id());

        let session = self
            .sessions
            .find_active(session_id, Utc::now())
            .await?
            .ok_or(IdentityError::SessionInvalid)?;

        if session.user_id != user_id || session.token_hash != hash_token(token) {
            tracing::warn!(session_id = %session_id, "Token does not match its session");
            return Err(IdentityError::SessionInvalid);
        }

        Ok(AuthenticatedUser {
            user_id,
            session_id,
            username: claims.username,
        })
    }

    /// Revokes a session. Returns whether an active session was revoked.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Storage` if the update fails.
    pub async fn logout(&self, session_id: SessionId) -> Result<bool, IdentityError> {
        let revoked = self.sessions.revoke(session_id).await?;
        tracing::info!(session_id = %session_id, revoked, "User logged out");
        Ok(revoked)
    }

    /// Looks up a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Storage` if the query fails.
    pub async fn find_user(&self, user_id: UserId) -> Result<Option<User>, IdentityError> {
        Ok(self.users.find_by_id(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use pocketbook_shared::JwtConfig;

    fn service(store: &Arc<InMemoryStore>) -> IdentityService {
        let jwt = JwtService::new(JwtConfig {
            secret: "identity-test-secret".to_string(),
            session_expires_secs: 3600,
        });
        IdentityService::new(store.clone(), store.clone(), Arc::new(jwt))
    }

    fn request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some("password123".to_string()),
            ..RegisterRequest::default()
        }
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let store = Arc::new(InMemoryStore::new());
        let identity = service(&store);

        let user = identity
            .register(&request("alice", "Alice@Example.com"))
            .await
            .unwrap();
        assert_eq!(user.email, "alice@example.com");
        assert!(user.password_hash.starts_with("$argon2id$"));

        let outcome = identity
            .login(Some("ALICE@example.com"), Some("password123"))
            .await
            .unwrap();
        assert_eq!(outcome.user.id, user.id);

        let caller = identity.authenticate(&outcome.token).await.unwrap();
        assert_eq!(caller.user_id, user.id);
        assert_eq!(caller.session_id, outcome.session_id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_insert() {
        let store = Arc::new(InMemoryStore::new());
        let identity = service(&store);

        identity
            .register(&request("alice", "alice@example.com"))
            .await
            .unwrap();
        let err = identity
            .register(&request("alice2", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::Duplicate(ref f) if f == "email"));

        let found = store.find_by_username("alice2").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_bad_credentials_indistinguishable() {
        let store = Arc::new(InMemoryStore::new());
        let identity = service(&store);
        identity
            .register(&request("bob", "bob@example.com"))
            .await
            .unwrap();

        let wrong_password = identity
            .login(Some("bob@example.com"), Some("not-the-password"))
            .await
            .unwrap_err();
        let unknown_email = identity
            .login(Some("nobody@example.com"), Some("password123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, IdentityError::InvalidCredentials));
        assert!(matches!(unknown_email, IdentityError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_logout_revokes_session() {
        let store = Arc::new(InMemoryStore::new());
        let identity = service(&store);
        identity
            .register(&request("carol", "carol@example.com"))
            .await
            .unwrap();
        let outcome = identity
            .login(Some("carol@example.com"), Some("password123"))
            .await
            .unwrap();

        assert!(identity.logout(outcome.session_id).await.unwrap());
        assert!(matches!(
            identity.authenticate(&outcome.token).await,
            Err(IdentityError::SessionInvalid)
        ));
        assert!(!identity.logout(outcome.session_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let store = Arc::new(InMemoryStore::new());
        let identity = service(&store);
        assert!(matches!(
            identity.authenticate("not.a.token").await,
            Err(IdentityError::SessionInvalid)
        ));
    }
}
