use crate::{
    database::{SubmissionRepository, DEFAULT_SUBMISSION_LIMIT},
    error::{AppError, Result},
    models::{ContactSubmission, ContactSubmissionCreate},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Validates contact submissions and hands them to storage.
#[derive(Clone)]
pub struct ContactService {
    repository: Arc<dyn SubmissionRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit(&self, payload: ContactSubmissionCreate) -> Result<ContactSubmission> {
        let new_submission = payload.normalize().map_err(|result| {
            warn!("Rejected contact submission: {}", result.messages().join("; "));
            AppError::Validation(result)
        })?;

        let submission = ContactSubmission::from_new(new_submission);
        self.repository.insert(&submission).await?;

        info!("Stored contact submission {}", submission.id);
        Ok(submission)
    }

    pub async fn list(&self) -> Result<Vec<ContactSubmission>> {
        self.repository.list_recent(DEFAULT_SUBMISSION_LIMIT).await
    }
}
