//! # Business Rules
//!
//! Checks that run after schema validation succeeds and before anything is
//! persisted.
//!
//! ```text
//! validate ──▶ password confirmation ──▶ email availability ──▶ persist
//!                (pure)                   (needs a lookup)
//! ```

use crate::forms::{InvoiceForm, RegistrationForm};
use crate::money::Money;
use crate::registry::fields;
use crate::submission::SubmissionResult;
use crate::types::User;

pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match.";
pub const PASSWORDS_DONT_MATCH_SUMMARY: &str = "Passwords don't match. Failed to Create User.";
pub const EMAIL_IN_USE: &str = "Email already in use.";
pub const EMAIL_IN_USE_SUMMARY: &str = "Email already in use. Failed to Create User.";

/// A business rule that failed, scoped to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub field: &'static str,
    pub message: &'static str,
    pub summary: &'static str,
}

impl From<RuleViolation> for SubmissionResult {
    fn from(violation: RuleViolation) -> Self {
        SubmissionResult::field_error(violation.field, violation.message, violation.summary)
    }
}

/// Password and confirmation must be identical.
pub fn check_password_confirmation(form: &RegistrationForm) -> Result<(), RuleViolation> {
    if form.password == form.confirm_password {
        Ok(())
    } else {
        Err(RuleViolation {
            field: fields::CONFIRM_PASSWORD,
            message: PASSWORDS_DONT_MATCH,
            summary: PASSWORDS_DONT_MATCH_SUMMARY,
        })
    }
}

/// The email must not belong to an existing user.
///
/// Takes the result of the lookup so the rule stays pure.
pub fn check_email_available(existing: Option<&User>) -> Result<(), RuleViolation> {
    match existing {
        None => Ok(()),
        Some(_) => Err(RuleViolation {
            field: fields::EMAIL,
            message: EMAIL_IN_USE,
            summary: EMAIL_IN_USE_SUMMARY,
        }),
    }
}

/// Converts the validated dollar amount to stored cents.
pub fn invoice_amount(form: &InvoiceForm) -> Money {
    Money::from_major_units(form.amount)
}
