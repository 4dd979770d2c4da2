//! Response envelopes shared by the API handlers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    pub validation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

impl ApiResponse {
    pub fn created(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id.into()),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
            errors: None,
        }
    }

    pub fn validation_failed(message: impl Into<String>, reasons: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
            errors: Some(ErrorDetails { validation: reasons }),
        }
    }
}
