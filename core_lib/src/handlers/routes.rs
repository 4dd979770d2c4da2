//! Route table

use crate::{
    error::AppError,
    handlers::{contact, health, status},
    AppState,
};
use axum::{routing::get, Router};

/// Builds the API routes under `prefix` (e.g. `/api`), plus `/health`.
pub fn create_routes(prefix: &str) -> Router<AppState> {
    let mut router = Router::new()
        .route(&format!("{}/", prefix), get(health::handle_root))
        .route(
            &format!("{}/status", prefix),
            get(status::handle_list_status_checks).post(status::handle_create_status_check),
        )
        .route(
            &format!("{}/contact", prefix),
            get(contact::handle_list_contacts).post(contact::handle_submit_contact),
        )
        .route("/health", get(health::handle_health));

    if !prefix.is_empty() {
        router = router.route(prefix, get(health::handle_root));
    }

    router.fallback(handle_not_found)
}

async fn handle_not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
