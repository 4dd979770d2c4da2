//! Main entry point for the GreenLoop API server binary

use anyhow::Result;
use greenloop_core::{
    create_app_with_config, ensure_schema, get_database_pool, run_server, AppConfig, AppState,
    DatabaseManager,
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry RUST_LOG / LOG_FORMAT, so read it before tracing starts
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Failed to read .env file: {}", e),
    }

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!("Configuration loaded successfully");
    info!("Server will bind to: {}", config.bind_address());
    info!("API prefix: {}", config.server.api_prefix);
    info!("Allowed CORS origins: {}", config.cors.allowed_origins.join(", "));

    let addr: SocketAddr = config.bind_address().parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let db_manager = initialize_database(&config).await?;
    let state = AppState::with_database(db_manager.clone());

    info!("App: {} v{}", state.app_name, state.version);

    let app = create_app_with_config(state, &config);
    let served = run_server(app, addr).await;

    db_manager.close().await;
    served.map_err(|e| anyhow::anyhow!("Server terminated with error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn initialize_database(config: &AppConfig) -> Result<DatabaseManager> {
    let pool = get_database_pool(&config.database).await
        .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;

    if config.database.create_tables_on_start {
        if let Err(e) = ensure_schema(&pool).await {
            pool.close().await;
            return Err(anyhow::anyhow!("Failed to prepare database schema: {}", e));
        }
    }

    let db_manager = DatabaseManager::new(pool);
    db_manager.health_check().await
        .map_err(|e| anyhow::anyhow!("Database is not reachable: {}", e))?;

    info!("Database initialized successfully");
    Ok(db_manager)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            let default_level = if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            };

            format!(
                "{}={level},greenloop_core={level},tower_http={level}",
                env!("CARGO_CRATE_NAME").replace('-', "_"),
                level = default_level
            ).into()
        });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
