//! Registration, login, logout and current-user routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::LOCATION},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use pocketbook_shared::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use pocketbook_shared::types::SessionId;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::{AuthUser, session_token};

/// Public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
}

/// Auth routes behind the session middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/api/me", get(me))
}

/// POST /register - Create an account.
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let user = state.identity.register(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user.id.into_inner(),
            message: "Registration successful".to_string(),
        }),
    ))
}

/// POST /login - Check credentials, open a session and set its cookie.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let outcome = state
        .identity
        .login(payload.email.as_deref(), payload.password.as_deref())
        .await?;

    let cookie = Cookie::build((state.session.cookie_name.clone(), outcome.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.session.secure_cookie)
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            user: outcome.user.info(),
            token: outcome.token,
            expires_at: outcome.expires_at,
        }),
    ))
}

/// GET /logout - Revoke the session (if any), clear the cookie, go to /login.
///
/// The token is taken from the cookie or a bearer header, as for protected
/// routes. A missing or stale session still clears the cookie and redirects.
async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(token) = session_token(&headers, &state.session.cookie_name) {
        match state.identity.authenticate(&token).await {
            Ok(user) => revoke(&state, user.session_id).await,
            Err(e) => tracing::debug!(error = %e, "Logout without a valid session"),
        }
    }

    let removal = Cookie::build(state.session.cookie_name.clone())
        .path("/")
        .build();

    (
        StatusCode::FOUND,
        [(LOCATION, "/login")],
        jar.remove(removal),
    )
}

async fn revoke(state: &AppState, session_id: SessionId) {
    if let Err(e) = state.identity.logout(session_id).await {
        tracing::error!(session_id = %session_id, error = %e, "Failed to revoke session");
    }
}

/// GET /api/me - The logged-in user's profile.
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<impl IntoResponse> {
    let user = state
        .identity
        .find_user(auth.user_id())
        .await?
        .ok_or_else(|| ApiError::unauthorized("Login required"))?;

    Ok(Json(user.info()))
}
