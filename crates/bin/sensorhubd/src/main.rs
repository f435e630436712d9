//! # sensorhubd — sensorhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository and hasher implementations (adapters)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use sensorhub_adapter_http_axum::state::AppState;
use sensorhub_adapter_password_bcrypt::BcryptHasher;
use sensorhub_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteReadingRepository, SqliteUserRepository,
};
use sensorhub_app::services::account_service::AccountService;
use sensorhub_app::services::reading_service::ReadingService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories & hasher
    let user_repo = SqliteUserRepository::new(pool.clone());
    let reading_repo = SqliteReadingRepository::new(pool);
    let hasher = BcryptHasher::default();

    // Services
    let account_service = AccountService::new(user_repo, hasher);
    let reading_service = ReadingService::new(reading_repo);

    // HTTP
    let state = AppState::new(account_service, reading_service);
    let app = sensorhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("sensorhubd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
