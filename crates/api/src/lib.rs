//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - JSON routes for identity, ledger, analytics and categories
//! - Session middleware (cookie or bearer token)
//! - Uniform `{"error", "message"}` error bodies

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::sensitive_headers::{
    SetSensitiveRequestHeadersLayer, SetSensitiveResponseHeadersLayer,
};
use tower_http::trace::TraceLayer;

use pocketbook_core::ports::{CategoryStore, HealthCheck, LedgerStore, SessionStore, UserStore};
use pocketbook_core::{
    AnalyticsService, CategoryService, IdentityService, InMemoryStore, LedgerService,
};
use pocketbook_shared::config::SessionConfig;
use pocketbook_shared::{AnalyticsConfig, AppConfig, JwtService, LedgerConfig};

/// Storage adapters the services are built on.
#[derive(Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Login sessions.
    pub sessions: Arc<dyn SessionStore>,
    /// Ledger transactions and aggregates.
    pub ledger: Arc<dyn LedgerStore>,
    /// Categories.
    pub categories: Arc<dyn CategoryStore>,
    /// Liveness probe.
    pub health: Arc<dyn HealthCheck>,
}

impl Stores {
    /// Every port served by one in-memory store.
    #[must_use]
    pub fn in_memory(store: &Arc<InMemoryStore>) -> Self {
        Self {
            users: store.clone(),
            sessions: store.clone(),
            ledger: store.clone(),
            categories: store.clone(),
            health: store.clone(),
        }
    }
}

/// Runtime options for the HTTP layer and services.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Session cookie options.
    pub session: SessionConfig,
    /// Ledger listing options.
    pub ledger: LedgerConfig,
    /// Analytics options.
    pub analytics: AnalyticsConfig,
}

impl From<&AppConfig> for Settings {
    fn from(config: &AppConfig) -> Self {
        Self {
            session: config.session.clone(),
            ledger: config.ledger,
            analytics: config.analytics,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and sessions.
    pub identity: IdentityService,
    /// Transaction records.
    pub ledger: LedgerService,
    /// Monthly and category buckets.
    pub analytics: AnalyticsService,
    /// Category registry.
    pub categories: CategoryService,
    /// Store liveness probe.
    pub health: Arc<dyn HealthCheck>,
    /// Session cookie options.
    pub session: Arc<SessionConfig>,
}

impl AppState {
    /// Wires the services onto their stores.
    #[must_use]
    pub fn new(stores: Stores, jwt: Arc<JwtService>, settings: Settings) -> Self {
        Self {
            identity: IdentityService::new(stores.users, stores.sessions, jwt),
            ledger: LedgerService::new(stores.ledger.clone(), settings.ledger),
            analytics: AnalyticsService::new(stores.ledger, settings.analytics),
            categories: CategoryService::new(stores.categories),
            health: stores.health,
            session: Arc::new(settings.session),
        }
    }
}

/// Largest accepted request body. Every payload here is a small JSON object.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Creates the main application router.
///
/// Session tokens in `Authorization`, `Cookie` and `Set-Cookie` are marked
/// sensitive so the trace layer never logs them.
pub fn create_router(state: AppState) -> Router {
    routes::app_routes(state.clone())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(SetSensitiveResponseHeadersLayer::new([SET_COOKIE]))
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new([AUTHORIZATION, COOKIE]))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
