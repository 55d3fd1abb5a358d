//! Rolo server - main entry point.
//!
//! Loads configuration, opens the database, wires repositories and services
//! together, and runs the HTTP server.

use anyhow::Result;
use rolo_server::auth::TokenIssuer;
use rolo_server::repositories::{
    ContactRepository, SqliteContactRepository, SqliteUserRepository, UserRepository,
};
use rolo_server::services::{
    AuthService, AuthServiceImpl, ContactService, ContactServiceImpl,
};
use rolo_server::{db, run_server, AppState, Config, Metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Open the database and apply the schema
    let pool = match db::connect(&config.database_url, config.db_max_connections).await {
        Ok(pool) => {
            info!(url = %config.database_url, "Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl_days);

    // Initialize repositories
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let contact_repo =
        Arc::new(SqliteContactRepository::new(pool.clone())) as Arc<dyn ContactRepository>;

    // Initialize services
    let auth = Arc::new(AuthServiceImpl::new(
        user_repo,
        tokens.clone(),
        config.bcrypt_cost,
    )) as Arc<dyn AuthService>;
    let contacts = Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;

    let state = AppState {
        auth,
        contacts,
        tokens,
        metrics: Metrics::new(),
    };

    let addr = config.socket_addr()?;
    info!("Starting Rolo API server on {}", addr);

    // Run the server (this will block until the server exits)
    run_server(addr, state).await?;

    info!("Rolo server shutdown complete");
    Ok(())
}
