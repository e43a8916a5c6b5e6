//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── CoreError        - Typed-record extraction and parsing faults     │
//! │                                                                         │
//! │  tally-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  dashboard errors (in app)                                             │
//! │  └── ActionError      - Fatal, unrecovered submission failures         │
//! │                                                                         │
//! │  User-correctable problems are NOT errors: they travel as              │
//! │  FieldErrors inside ValidationOutcome / SubmissionResult.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core form logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A declared field has no value in the validated record.
    ///
    /// ## When This Occurs
    /// - A typed form reads a field its schema does not declare
    #[error("{field} is missing")]
    MissingField { field: String },

    /// A validated value has a different primitive type than expected.
    #[error("{field} must be a {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// Status text is not one of the known invoice statuses.
    #[error("Unknown invoice status: {0}")]
    UnknownStatus(String),
}

impl CoreError {
    /// Returns the form field this error is attributed to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::MissingField { field } | CoreError::FieldType { field, .. } => {
                Some(field)
            }
            CoreError::UnknownStatus(_) => None,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::FieldType {
            field: "amount".to_string(),
            expected: "number",
        };
        assert_eq!(err.to_string(), "amount must be a number");

        let err = CoreError::UnknownStatus("overdue".to_string());
        assert_eq!(err.to_string(), "Unknown invoice status: overdue");
    }

    #[test]
    fn test_field_attribution() {
        let err = CoreError::MissingField {
            field: "status".to_string(),
        };
        assert_eq!(err.field(), Some("status"));
        assert_eq!(CoreError::UnknownStatus("x".into()).field(), None);
    }
}
