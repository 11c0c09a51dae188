//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`EngineError`] covers request- and batch-level failures; [`DecodeError`]
//! covers per-row date/time decode failures, which degrade or skip the row
//! rather than aborting the batch.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// Validation variants map to client errors, `EmployeeNotFound` to a
/// not-found response, and the processing/config variants to server errors
/// with diagnostic detail.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     name: "Alice".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: Alice");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more required request parameters were not supplied.
    #[error("Missing required parameters: {names}")]
    MissingParameters {
        /// Comma-separated list of the missing parameter names.
        names: String,
    },

    /// The requested month is outside the 1-12 range.
    #[error("Month must be between 1 and 12, got {month}")]
    InvalidMonth {
        /// The month value that was rejected.
        month: u32,
    },

    /// The referenced employee does not exist in the store.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The employee name that was looked up.
        name: String,
    },

    /// The upload request did not carry a file part.
    #[error("No file provided")]
    MissingFile,

    /// The uploaded sheet has no data rows.
    #[error("Uploaded sheet contains no data rows")]
    EmptySheet,

    /// The uploaded workbook could not be read at all.
    #[error("Failed to read workbook: {message}")]
    WorkbookRead {
        /// A description of the read failure.
        message: String,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Row-level decode failures.
///
/// These never fail a batch: an undecodable date skips the row, an
/// undecodable clock time degrades worked hours to zero with a warning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A date string did not match any recognized format.
    #[error("unrecognized date value '{value}'")]
    UnparseableDate {
        /// The raw cell text.
        value: String,
    },

    /// A numeric day-serial is outside the representable date range.
    #[error("date serial {serial} is out of range")]
    SerialOutOfRange {
        /// The raw serial value.
        serial: f64,
    },

    /// A clock time string was not valid 24-hour `HH:mm`.
    #[error("invalid clock time '{value}'")]
    UnparseableTime {
        /// The raw cell text.
        value: String,
    },
}
