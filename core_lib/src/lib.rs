//! Core library for the GreenLoop contact backend: validation, storage and HTTP handlers.

pub mod config;
pub mod database;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use database::{
    ensure_schema, get_database_pool, ContactRepository, DatabaseManager, StatusCheckRepository,
    StatusRepository, SubmissionRepository,
};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::cors_layer_from_config;
pub use services::{ContactService, StatusService};
pub use validation::ValidationResult;

use axum::Router;
use std::{future::Future, net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub db_manager: Option<DatabaseManager>,
    pub contact_service: ContactService,
    pub status_service: StatusService,
}

impl AppState {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        status_checks: Arc<dyn StatusCheckRepository>,
    ) -> Self {
        Self {
            app_name: "GreenLoop Project API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            db_manager: None,
            contact_service: ContactService::new(submissions),
            status_service: StatusService::new(status_checks),
        }
    }

    pub fn with_database(db_manager: DatabaseManager) -> Self {
        let pool = db_manager.pool().clone();
        let mut state = Self::new(
            Arc::new(ContactRepository::new(pool.clone())),
            Arc::new(StatusRepository::new(pool)),
        );
        state.db_manager = Some(db_manager);
        state
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes(&config.server.api_prefix))
        .layer(cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    run_server_with_shutdown(app, addr, shutdown_signal()).await
}

pub async fn run_server_with_shutdown<F>(app: Router, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Other(anyhow::anyhow!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Other(anyhow::anyhow!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
