//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod analytics;
pub mod auth;
pub mod categories;
pub mod health;
pub mod transactions;

/// Creates the router with public and session-protected routes.
#[allow(clippy::needless_pass_by_value)]
pub fn app_routes(state: AppState) -> Router<AppState> {
    // Protected routes that require a session
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(transactions::routes())
        .merge(analytics::routes())
        .merge(categories::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
