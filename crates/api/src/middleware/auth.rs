//! Session middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use pocketbook_core::identity::{AuthenticatedUser, IdentityError};
use pocketbook_shared::types::UserId;

use crate::AppState;
use crate::error::ApiError;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds the session token: the session cookie first, then a bearer header.
#[must_use]
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .map(str::to_string)
}

/// Authentication middleware that resolves the session.
///
/// This middleware:
/// 1. Takes the token from the session cookie or the Authorization header
/// 2. Checks its signature and the server-side session row
/// 3. Stores the acting user in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(request.headers(), &state.session.cookie_name) else {
        return ApiError::unauthorized("Login required").into_response();
    };

    match state.identity.authenticate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(IdentityError::SessionInvalid) => {
            ApiError::unauthorized("Session is invalid or has expired").into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Extractor for the authenticated caller.
///
/// Only available behind [`auth_middleware`]. The user ID always comes from
/// the session, never from the request body or query.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    /// Returns the acting user's ID.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.0.user_id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::unauthorized("Login required"))
    }
}
