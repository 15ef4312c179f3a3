//! Seeds the system-default categories.
//!
//! Safe to run repeatedly: defaults are upserted, user categories are untouched.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook_core::CategoryService;
use pocketbook_db::{CategoryRepository, connect};
use pocketbook_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pocketbook=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    info!("Connecting to database...");
    let db = connect(&config.database).await?;

    let categories = CategoryService::new(Arc::new(CategoryRepository::new(db)));
    let seeded = categories.seed_defaults().await?;

    info!(seeded, "Seeding complete");
    Ok(())
}
