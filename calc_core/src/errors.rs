//! # Error Types
//!
//! Structured error types for calc_core. Validation errors carry the field
//! label and the offending text so a front end can point the user at the
//! exact input that needs fixing.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_bolt_count(text: &str) -> CalcResult<i64> {
//!     text.trim().parse().map_err(|_| {
//!         CalcError::invalid_input("Number of Bolts", text, "Expected a whole number")
//!     })
//! }
//!
//! assert!(parse_bolt_count("4").is_ok());
//! assert!(parse_bolt_count("four").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Message shown to the user whenever the check inputs cannot be parsed.
pub const INPUT_ERROR_MESSAGE: &str =
    "Please enter valid values for Bolt diameter, Number of bolts, Length, and Yield strength.";

/// Structured error type for form, check and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not a number, not one of the options, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// No form field carries this label
    #[error("Unknown field: {label}")]
    UnknownField { label: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Typst compilation or PDF encoding failed
    #[error("PDF rendering failed: {stage} - {reason}")]
    RenderFailed { stage: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(label: impl Into<String>) -> Self {
        CalcError::UnknownField {
            label: label.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed or picked.
    ///
    /// Front ends show [`INPUT_ERROR_MESSAGE`] for these instead of the
    /// detailed text.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::MissingField { .. } | CalcError::UnknownField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::RenderFailed { .. } => "RENDER_FAILED",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("Length (mm)", "abc", "Expected a whole number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("Length (mm)").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_field("Colour").error_code(), "UNKNOWN_FIELD");
        assert_eq!(CalcError::render_failed("compile", "x").error_code(), "RENDER_FAILED");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::missing_field("Number of Bolts").is_input_error());
        assert!(CalcError::invalid_input("Bolt Diameter (mm)", "", "x").is_input_error());
        assert!(!CalcError::file_error("write", "out.pdf", "denied").is_input_error());
        assert!(!CalcError::render_failed("pdf", "x").is_input_error());
    }

    #[test]
    fn test_display_includes_context() {
        let error = CalcError::file_error("rename", "report.pdf", "permission denied");
        assert_eq!(
            error.to_string(),
            "File error: rename on 'report.pdf' - permission denied"
        );
    }
}
