use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

use crate::database::models::{encode_timestamp, DbContactSubmission, DbStatusCheck};
use crate::error::{AppError, Result};
use crate::models::{ContactSubmission, StatusCheck};

/// Cap applied to submission listings.
pub const DEFAULT_SUBMISSION_LIMIT: i64 = 100;
/// Cap applied to status-check listings.
pub const DEFAULT_STATUS_CHECK_LIMIT: i64 = 1000;

/// Append-only storage for validated contact submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn insert(&self, submission: &ContactSubmission) -> Result<()>;

    /// Newest first, at most `limit` records.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ContactSubmission>>;
}

#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    async fn insert(&self, check: &StatusCheck) -> Result<()>;

    /// Oldest first, at most `limit` records.
    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>>;
}

#[derive(Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for ContactRepository {
    async fn insert(&self, submission: &ContactSubmission) -> Result<()> {
        let result = sqlx::query(r#"
            INSERT INTO contact_submissions (id, name, email, organization, interest, message, submitted_at, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#)
        .bind(submission.id.to_string())
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.organization)
        .bind(submission.interest.map(|interest| interest.as_str()))
        .bind(&submission.message)
        .bind(encode_timestamp(&submission.submitted_at))
        .bind(submission.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to insert contact submission {}: {}", submission.id, e);
            AppError::from(e)
        })?;

        if result.rows_affected() != 1 {
            return Err(AppError::Storage(format!(
                "Insert of contact submission {} affected {} rows",
                submission.id,
                result.rows_affected()
            )));
        }

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ContactSubmission>> {
        let rows = sqlx::query_as::<_, DbContactSubmission>(r#"
            SELECT id, name, email, organization, interest, message, submitted_at, status
            FROM contact_submissions
            ORDER BY submitted_at DESC, seq DESC
            LIMIT ?
        "#)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list contact submissions: limit={}, error={}", limit, e);
            AppError::from(e)
        })?;

        rows.into_iter()
            .map(DbContactSubmission::into_submission)
            .collect()
    }
}

#[derive(Clone)]
pub struct StatusRepository {
    pool: SqlitePool,
}

impl StatusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusCheckRepository for StatusRepository {
    async fn insert(&self, check: &StatusCheck) -> Result<()> {
        sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES (?, ?, ?)")
            .bind(check.id.to_string())
            .bind(&check.client_name)
            .bind(encode_timestamp(&check.timestamp))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to insert status check {}: {}", check.id, e);
                AppError::from(e)
            })?;

        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let rows = sqlx::query_as::<_, DbStatusCheck>(r#"
            SELECT id, client_name, timestamp
            FROM status_checks
            ORDER BY seq ASC
            LIMIT ?
        "#)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        rows.into_iter()
            .map(DbStatusCheck::into_status_check)
            .collect()
    }
}
