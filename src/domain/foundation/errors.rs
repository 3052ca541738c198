//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur while resolving or checking domain input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Unknown framework: {0}")]
    UnknownFramework(String),
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an unknown framework error.
    pub fn unknown_framework(slug: impl Into<String>) -> Self {
        ValidationError::UnknownFramework(slug.into())
    }
}

/// Machine-readable error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Required report fields were empty
    ValidationFailed,
    /// Malformed or blank request input
    BadRequest,
    /// Unknown framework or route target
    NotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("problem_statement");
        assert_eq!(format!("{}", err), "Field 'problem_statement' cannot be empty");
    }

    #[test]
    fn unknown_framework_displays_slug() {
        let err = ValidationError::unknown_framework("swot");
        assert_eq!(format!("{}", err), "Unknown framework: swot");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
        assert_eq!(format!("{}", ErrorCode::BadRequest), "BAD_REQUEST");
        assert_eq!(format!("{}", ErrorCode::NotFound), "NOT_FOUND");
    }
}
