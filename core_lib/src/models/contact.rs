//! Contact-form models and the normalization that gates persistence

use crate::validation::{
    field_error, normalize_optional, validate_email, validate_in_list, validate_required_text,
    validate_text_length, ValidationResult, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS,
    NAME_MIN_CHARS, ORGANIZATION_MAX_CHARS,
};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "Learning about products")]
    LearningAboutProducts,
    #[serde(rename = "Partnership opportunities")]
    PartnershipOpportunities,
    #[serde(rename = "Joining the community")]
    JoiningTheCommunity,
    #[serde(rename = "Research collaboration")]
    ResearchCollaboration,
    #[serde(rename = "Bulk orders")]
    BulkOrders,
    #[serde(rename = "Other")]
    Other,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::LearningAboutProducts,
        Interest::PartnershipOpportunities,
        Interest::JoiningTheCommunity,
        Interest::ResearchCollaboration,
        Interest::BulkOrders,
        Interest::Other,
    ];

    pub const LABELS: [&'static str; 6] = [
        "Learning about products",
        "Partnership opportunities",
        "Joining the community",
        "Research collaboration",
        "Bulk orders",
        "Other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::LearningAboutProducts => Self::LABELS[0],
            Interest::PartnershipOpportunities => Self::LABELS[1],
            Interest::JoiningTheCommunity => Self::LABELS[2],
            Interest::ResearchCollaboration => Self::LABELS[3],
            Interest::BulkOrders => Self::LABELS[4],
            Interest::Other => Self::LABELS[5],
        }
    }

    /// Case-sensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.as_str() == label)
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubmissionStatus {
    New,
    Other(String),
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Other(value) => value,
        }
    }
}

impl From<String> for SubmissionStatus {
    fn from(value: String) -> Self {
        if value == "new" {
            SubmissionStatus::New
        } else {
            SubmissionStatus::Other(value)
        }
    }
}

impl From<SubmissionStatus> for String {
    fn from(status: SubmissionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Raw contact-form payload as received over the wire.
///
/// Every field is optional at this stage so that missing fields are reported
/// as validation reasons rather than as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmissionCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub interest: Option<String>,
    pub message: Option<String>,
}

/// A payload that passed every field rule, with text fields trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub interest: Option<Interest>,
    pub message: String,
}

impl ContactSubmissionCreate {
    pub fn normalize(self) -> Result<NewContactSubmission, ValidationResult> {
        self.normalize_fields()
            .map_err(ValidationResult::from_validation_errors)
    }

    fn normalize_fields(&self) -> Result<NewContactSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate_required_text("Name", self.name.as_deref(), NAME_MIN_CHARS, NAME_MAX_CHARS)
            .map_err(|e| errors.add("name", e))
            .ok();

        let email = match self.email.as_deref() {
            None => {
                errors.add("email", field_error("required", "Email is required"));
                None
            }
            Some(email) => validate_email(email)
                .map(|_| email.to_string())
                .map_err(|e| errors.add("email", e))
                .ok(),
        };

        let organization = normalize_optional(self.organization.as_deref());
        if let Some(org) = &organization {
            if let Err(e) = validate_text_length("Organization", org, 0, ORGANIZATION_MAX_CHARS) {
                errors.add("organization", e);
            }
        }

        let interest = match self.interest.as_deref().filter(|v| !v.is_empty()) {
            None => None,
            Some(label) => match Interest::from_label(label) {
                Some(interest) => Some(interest),
                None => {
                    if let Err(e) = validate_in_list("Interest", label, &Interest::LABELS) {
                        errors.add("interest", e);
                    }
                    None
                }
            },
        };

        let message = validate_required_text(
            "Message",
            self.message.as_deref(),
            MESSAGE_MIN_CHARS,
            MESSAGE_MAX_CHARS,
        )
        .map_err(|e| errors.add("message", e))
        .ok();

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.errors().is_empty() => {
                Ok(NewContactSubmission {
                    name,
                    email,
                    organization,
                    interest,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub interest: Option<Interest>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

impl ContactSubmission {
    pub fn from_new(new: NewContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            organization: new.organization,
            interest: new.interest,
            message: new.message,
            // stored with microsecond precision
            submitted_at: Utc::now().trunc_subsecs(6),
            status: SubmissionStatus::New,
        }
    }
}
