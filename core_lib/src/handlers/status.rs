//! Status-check ping endpoints

use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::Result, extractors::ApiJson, models::StatusCheckCreate, AppState};

pub async fn handle_create_status_check(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<StatusCheckCreate>,
) -> Result<impl IntoResponse> {
    let check = state.status_service.record(input).await?;
    Ok(Json(check))
}

pub async fn handle_list_status_checks(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let checks = state.status_service.list().await?;
    Ok(Json(checks))
}
