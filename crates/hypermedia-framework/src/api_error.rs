//! API errors rendered through the error writer.

use crate::error::WriterError;
use serde::{Deserialize, Serialize};

/// An error answer: what went wrong, for whom, and with which HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub error_type: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn new(title: impl Into<String>, error_type: impl Into<String>, status_code: u16) -> Self {
        Self {
            title: title.into(),
            description: None,
            error_type: error_type.into(),
            status_code,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new("Resource not found", "not-found", 404).with_description(description)
    }

    pub fn server_error(description: impl Into<String>) -> Self {
        Self::new("General server error", "server-error", 500).with_description(description)
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }
}

impl From<&WriterError> for ApiError {
    /// Configuration errors are the server's fault.
    fn from(error: &WriterError) -> Self {
        Self::server_error(error.to_string())
    }
}

impl From<WriterError> for ApiError {
    fn from(error: WriterError) -> Self {
        Self::from(&error)
    }
}
