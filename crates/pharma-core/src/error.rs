//! Error types for the PharmaIntelligence client.
//!
//! Every failure a dispatch can produce is a [`PharmaError`]. Only two kinds
//! ever reach the user: validation errors (fixed message, raised before any
//! network activity) and request errors (server `detail` or a fixed fallback).
//! [`PharmaError::user_message`] performs that mapping.

use crate::config::Messages;
use thiserror::Error;

/// Main error type for the PharmaIntelligence client.
#[derive(Debug, Error)]
pub enum PharmaError {
    // Input errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("An analysis is already in progress")]
    DispatchInProgress,

    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Analysis service returned HTTP {status}")]
    Api {
        status: u16,
        /// `detail` string from the error body, when present.
        detail: Option<String>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Presentation errors
    #[error("Render error: {message}")]
    Render { message: String },
}

/// Result type alias for PharmaIntelligence operations.
pub type Result<T> = std::result::Result<T, PharmaError>;

impl From<serde_json::Error> for PharmaError {
    fn from(err: serde_json::Error) -> Self {
        PharmaError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for PharmaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PharmaError::Json {
                message: err.to_string(),
                source: None,
            }
        } else {
            PharmaError::Network {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

impl From<handlebars::RenderError> for PharmaError {
    fn from(err: handlebars::RenderError) -> Self {
        PharmaError::Render {
            message: err.to_string(),
        }
    }
}

impl From<handlebars::TemplateError> for PharmaError {
    fn from(err: handlebars::TemplateError) -> Self {
        PharmaError::Render {
            message: err.to_string(),
        }
    }
}

impl PharmaError {
    /// The validation error raised for empty or whitespace-only input.
    pub fn empty_query() -> Self {
        PharmaError::Validation {
            field: "drugs".to_string(),
            message: Messages::EMPTY_QUERY.to_string(),
        }
    }

    /// Text shown in the error banner for this failure.
    ///
    /// Validation errors show their own message, service errors carrying a
    /// non-empty `detail` show it verbatim, and everything else falls back
    /// to [`Messages::REQUEST_FAILED`].
    pub fn user_message(&self) -> String {
        match self {
            PharmaError::Validation { message, .. } => message.clone(),
            PharmaError::Api {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            PharmaError::DispatchInProgress => self.to_string(),
            _ => Messages::REQUEST_FAILED.to_string(),
        }
    }

    /// Whether this error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, PharmaError::Validation { .. })
    }

    /// Whether this error came out of a dispatched request.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            PharmaError::Network { .. }
                | PharmaError::Timeout(_)
                | PharmaError::Api { .. }
                | PharmaError::Json { .. }
        )
    }
}
