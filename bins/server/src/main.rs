//! Pocketbook API Server
//!
//! Main entry point for the Pocketbook backend service.

use std::sync::Arc;

use chrono::Utc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook_api::{AppState, Settings, Stores, create_router};
use pocketbook_db::{
    CategoryRepository, DatabaseHealth, SessionRepository, TransactionRepository, UserRepository,
    connect,
};
use pocketbook_shared::config::LoggingConfig;
use pocketbook_shared::{AppConfig, JwtConfig, JwtService};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pocketbook=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    // Connect to database
    let db = connect(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let sessions = SessionRepository::new(db.clone());
    let purged = sessions.purge_expired(Utc::now()).await?;
    info!(purged, "Removed expired sessions");

    let stores = Stores {
        users: Arc::new(UserRepository::new(db.clone())),
        sessions: Arc::new(sessions),
        ledger: Arc::new(TransactionRepository::new(db.clone())),
        categories: Arc::new(CategoryRepository::new(db.clone())),
        health: Arc::new(DatabaseHealth::new(db)),
    };

    let jwt_service = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        session_expires_secs: i64::try_from(config.jwt.session_expiry_secs)?,
    });

    let state = AppState::new(stores, Arc::new(jwt_service), Settings::from(&config));
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
