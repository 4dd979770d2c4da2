use crate::{
    database::{StatusCheckRepository, DEFAULT_STATUS_CHECK_LIMIT},
    error::Result,
    models::{StatusCheck, StatusCheckCreate},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusService {
    repository: Arc<dyn StatusCheckRepository>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn StatusCheckRepository>) -> Self {
        Self { repository }
    }

    pub async fn record(&self, input: StatusCheckCreate) -> Result<StatusCheck> {
        let check = StatusCheck::from(input);
        self.repository.insert(&check).await?;
        Ok(check)
    }

    pub async fn list(&self) -> Result<Vec<StatusCheck>> {
        self.repository.list(DEFAULT_STATUS_CHECK_LIMIT).await
    }
}
