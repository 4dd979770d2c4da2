use crate::error::{AppError, Result};
use crate::models::{ContactSubmission, Interest, StatusCheck, SubmissionStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Fixed-width timestamps so that text ordering matches time ordering.
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| AppError::Storage(format!("Invalid stored timestamp '{}': {}", raw, e)))
}

fn decode_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| AppError::Storage(format!("Invalid stored id '{}': {}", raw, e)))
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub interest: Option<String>,
    pub message: String,
    pub submitted_at: String,
    pub status: String,
}

impl DbContactSubmission {
    pub fn into_submission(self) -> Result<ContactSubmission> {
        let interest = match self.interest {
            Some(label) => Some(Interest::from_label(&label).ok_or_else(|| {
                AppError::Storage(format!("Unknown stored interest '{}'", label))
            })?),
            None => None,
        };

        Ok(ContactSubmission {
            id: decode_id(&self.id)?,
            name: self.name,
            email: self.email,
            organization: self.organization,
            interest,
            message: self.message,
            submitted_at: decode_timestamp(&self.submitted_at)?,
            status: SubmissionStatus::from(self.status),
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbStatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl DbStatusCheck {
    pub fn into_status_check(self) -> Result<StatusCheck> {
        Ok(StatusCheck {
            id: decode_id(&self.id)?,
            client_name: self.client_name,
            timestamp: decode_timestamp(&self.timestamp)?,
        })
    }
}
