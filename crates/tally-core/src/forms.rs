//! # Typed Forms
//!
//! The records a successful validation produces, one per form.

use crate::error::{CoreError, CoreResult};
use crate::registry::fields;
use crate::types::InvoiceStatus;
use crate::validation::{FromRecord, Record};

/// Validated invoice create/update form.
///
/// `amount` is still in dollars; conversion to cents is a business rule
/// (see [`crate::rules::invoice_amount`]).
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl FromRecord for InvoiceForm {
    fn from_record(mut record: Record) -> CoreResult<Self> {
        let customer_id = record.take_text(fields::CUSTOMER_ID)?;
        let amount = record.take_number(fields::AMOUNT)?;
        let status = record
            .take_text(fields::STATUS)?
            .parse()
            .map_err(|_| CoreError::FieldType {
                field: fields::STATUS.to_string(),
                expected: "invoice status",
            })?;

        Ok(InvoiceForm {
            customer_id,
            amount,
            status,
        })
    }
}

/// Validated registration form. Holds plaintext passwords: it must not
/// outlive the submission and is never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl FromRecord for RegistrationForm {
    fn from_record(mut record: Record) -> CoreResult<Self> {
        Ok(RegistrationForm {
            name: record.take_text(fields::NAME)?,
            email: record.take_text(fields::EMAIL)?,
            password: record.take_text(fields::PASSWORD)?,
            confirm_password: record.take_text(fields::CONFIRM_PASSWORD)?,
        })
    }
}

/// Validated sign-in form.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl FromRecord for LoginForm {
    fn from_record(mut record: Record) -> CoreResult<Self> {
        Ok(LoginForm {
            email: record.take_text(fields::EMAIL)?,
            password: record.take_text(fields::PASSWORD)?,
        })
    }
}
