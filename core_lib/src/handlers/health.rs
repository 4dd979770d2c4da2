//! Liveness and readiness endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::AppState;

pub const ROOT_MESSAGE: &str = "GreenLoop Project API is running";

pub async fn handle_root() -> impl IntoResponse {
    Json(json!({ "message": ROOT_MESSAGE }))
}

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let database_healthy = match &state.db_manager {
        Some(db_manager) => match db_manager.health_check().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Health check: database unavailable: {}", e);
                false
            }
        },
        None => true,
    };

    let (status, overall, database) = match (&state.db_manager, database_healthy) {
        (None, _) => (StatusCode::OK, "healthy", "not_configured"),
        (Some(_), true) => (StatusCode::OK, "healthy", "healthy"),
        (Some(_), false) => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "unhealthy"),
    };

    let body = json!({
        "status": overall,
        "database": database,
        "version": state.version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body))
}
