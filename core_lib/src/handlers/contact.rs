//! Contact-form endpoints

use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::{
    error::Result,
    extractors::ApiJson,
    models::{ApiResponse, ContactSubmissionCreate},
    AppState,
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

pub async fn handle_submit_contact(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactSubmissionCreate>,
) -> Result<impl IntoResponse> {
    info!("POST contact - submission received");

    let submission = state.contact_service.submit(payload).await?;

    Ok(Json(ApiResponse::created(
        SUBMIT_SUCCESS_MESSAGE,
        submission.id.to_string(),
    )))
}

pub async fn handle_list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let submissions = state.contact_service.list().await?;
    info!("GET contact - returning {} submissions", submissions.len());
    Ok(Json(submissions))
}
