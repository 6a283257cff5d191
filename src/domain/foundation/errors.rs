//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be a positive integer, got {actual}")]
    NotPositive { field: String, actual: i64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Purchase errors
    InvalidAccount,
    EmptyRequest,
    InvalidTicketCount,
    TooManyTickets,
    MissingAdult,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidAccount => "INVALID_ACCOUNT",
            ErrorCode::EmptyRequest => "EMPTY_REQUEST",
            ErrorCode::InvalidTicketCount => "INVALID_TICKET_COUNT",
            ErrorCode::TooManyTickets => "TOO_MANY_TICKETS",
            ErrorCode::MissingAdult => "MISSING_ADULT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_not_positive_displays_correctly() {
        let err = ValidationError::not_positive("quantity", -3);
        assert_eq!(
            format!("{}", err),
            "Field 'quantity' must be a positive integer, got -3"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("quantity", 1, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'quantity' must be between 1 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("category", "unknown ticket type 'SENIOR'");
        assert_eq!(
            format!("{}", err),
            "Field 'category' has invalid format: unknown ticket type 'SENIOR'"
        );
    }

    #[test]
    fn validation_errors_map_to_validation_failed() {
        assert_eq!(
            ValidationError::not_positive("account_id", 0).code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidAccount), "INVALID_ACCOUNT");
        assert_eq!(format!("{}", ErrorCode::TooManyTickets), "TOO_MANY_TICKETS");
        assert_eq!(format!("{}", ErrorCode::MissingAdult), "MISSING_ADULT");
    }
}
