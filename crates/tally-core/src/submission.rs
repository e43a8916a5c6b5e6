//! # Submission Result
//!
//! The form state handed back to the form layer for re-rendering.
//!
//! ## Wire Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  { "errors": { "amount": ["Please enter an amount greater than $0."] }, │
//! │    "message": "Missing Fields. Failed to Create Invoice." }             │
//! │                                                                         │
//! │  { "message": "Database Error: Failed to Create Invoice." }             │
//! │                                                                         │
//! │  {}   ← never sent: success navigates away and returns nothing          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::FieldErrors;

/// State of a submitted form.
///
/// Both members absent means success; orchestrators signal that by
/// returning `None` instead of an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionResult {
    /// Field-scoped messages, in constraint order per field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub errors: Option<FieldErrors>,

    /// Message shown above the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl SubmissionResult {
    /// Field errors plus a summary message.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        SubmissionResult {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    /// One field-scoped error plus a summary message.
    pub fn field_error(
        field: impl Into<String>,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![error.into()]);
        SubmissionResult::invalid(errors, message)
    }

    /// A message with no field errors.
    pub fn message(message: impl Into<String>) -> Self {
        SubmissionResult {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// True when neither member is present.
    pub fn is_success(&self) -> bool {
        self.errors.is_none() && self.message.is_none()
    }

    /// Errors for one field, empty if none.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_only_present_members() {
        let result = SubmissionResult::message("Deleted Invoice.");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "message": "Deleted Invoice." })
        );

        let result = SubmissionResult::field_error("email", "Email already in use.", "Failed.");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "errors": { "email": ["Email already in use."] }, "message": "Failed." })
        );

        assert_eq!(serde_json::to_value(SubmissionResult::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_deserializes_null_message() {
        let result: SubmissionResult = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_errors_for() {
        let result =
            SubmissionResult::field_error("confirmPassword", "Passwords don't match.", "x");
        assert_eq!(result.errors_for("confirmPassword"), ["Passwords don't match."]);
        assert!(result.errors_for("email").is_empty());
        assert!(!result.is_success());
    }
}
