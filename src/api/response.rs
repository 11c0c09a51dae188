//! Response types for the attendance engine API.
//!
//! This module defines the upload response, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::ingest::{BatchSummary, RowWarning, SkippedRow};

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Human-readable processing summary.
    pub message: String,
    /// Number of rows persisted (degraded rows included).
    pub records_processed: usize,
    /// Rows dropped, with reasons, in sheet order.
    pub skipped: Vec<SkippedRow>,
    /// Warnings for rows persisted with degraded values.
    pub warnings: Vec<RowWarning>,
}

impl From<BatchSummary> for UploadResponse {
    fn from(summary: BatchSummary) -> Self {
        Self {
            success: true,
            message: format!("Processed {} attendance records", summary.processed),
            records_processed: summary.processed,
            skipped: summary.skipped,
            warnings: summary.warnings,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MissingParameters { .. }
            | EngineError::InvalidMonth { .. }
            | EngineError::MissingFile
            | EngineError::EmptySheet => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", error.to_string()),
            },
            EngineError::WorkbookRead { ref message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PROCESSING_ERROR",
                    "Failed to process file",
                    message.clone(),
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParse { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
        }
    }
}
