//! # Validation Module
//!
//! Applies an [`EntitySchema`] to raw form input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Pipeline                                │
//! │                                                                         │
//! │  FormInput { "amount": "abc", "status": "" }                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  For EVERY declared field (absent → ""):                               │
//! │  ├── coercion (if declared)  ── fails? record message, skip rules      │
//! │  └── every constraint, in order ── collect ALL failing messages        │
//! │           │                                                             │
//! │           ├── any field failed? → Invalid { field_errors, message }    │
//! │           │                                                             │
//! │           └── all clean         → Valid { data: T::from_record(..) }   │
//! │                                                                         │
//! │  Nothing here panics or returns Err: bad input is data, not failure.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::forms::RegistrationForm;
//! use tally_core::registry;
//! use tally_core::validation::{validate, FormInput};
//!
//! let input = FormInput::from_pairs([("name", "Al")]);
//! let outcome = validate::<RegistrationForm>(registry::user_create(), &input);
//!
//! let errors = outcome.field_errors().unwrap();
//! assert_eq!(errors["name"], ["Name must be at least 3 characters."]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::schema::{EntitySchema, FieldValue};
use crate::submission::SubmissionResult;

/// Field name → ordered list of error messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

// =============================================================================
// Form Input
// =============================================================================

/// Raw form values. Every value arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        FormInput::default()
    }

    /// Builds an input from `(field, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        FormInput(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Sets a field value, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Returns the submitted value, or `""` for an absent field.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the field was submitted at all.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

// =============================================================================
// Validated Record
// =============================================================================

/// Coerced values of a form that passed every constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Record {
    fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.values.insert(field, value);
    }

    /// Takes a text value out of the record.
    pub fn take_text(&mut self, field: &str) -> CoreResult<String> {
        match self.values.remove(field) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(FieldValue::Number(_)) => Err(CoreError::FieldType {
                field: field.to_string(),
                expected: "string",
            }),
            None => Err(CoreError::MissingField {
                field: field.to_string(),
            }),
        }
    }

    /// Takes a numeric value out of the record.
    pub fn take_number(&mut self, field: &str) -> CoreResult<f64> {
        match self.values.remove(field) {
            Some(FieldValue::Number(n)) => Ok(n),
            Some(FieldValue::Text(_)) => Err(CoreError::FieldType {
                field: field.to_string(),
                expected: "number",
            }),
            None => Err(CoreError::MissingField {
                field: field.to_string(),
            }),
        }
    }
}

/// A typed form built from a validated [`Record`].
pub trait FromRecord: Sized {
    fn from_record(record: Record) -> CoreResult<Self>;
}

// =============================================================================
// Outcome
// =============================================================================

/// Result of validating one form. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome<T> {
    Valid {
        data: T,
    },
    Invalid {
        field_errors: FieldErrors,
        message: String,
    },
}

impl<T> ValidationOutcome<T> {
    /// Returns true for `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    /// Returns the field errors of an `Invalid` outcome.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationOutcome::Valid { .. } => None,
            ValidationOutcome::Invalid { field_errors, .. } => Some(field_errors),
        }
    }

    /// Splits the outcome into the typed data or the form state to re-render.
    pub fn into_result(self) -> Result<T, SubmissionResult> {
        match self {
            ValidationOutcome::Valid { data } => Ok(data),
            ValidationOutcome::Invalid {
                field_errors,
                message,
            } => Err(SubmissionResult::invalid(field_errors, message)),
        }
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Validates `input` against `schema` and builds the typed form `T`.
///
/// ## Algorithm
/// 1. Every declared field is read; absent fields are `""`
/// 2. Coercion runs first; a coercion failure is that field's only error
/// 3. Every constraint runs in declared order; all failures are kept
/// 4. Any errors → `Invalid` with the schema's failure message
/// 5. Otherwise `T::from_record`; an extraction fault becomes a field error
pub fn validate<T: FromRecord>(schema: &EntitySchema, input: &FormInput) -> ValidationOutcome<T> {
    let mut field_errors = FieldErrors::new();
    let mut record = Record::default();

    for field in schema.fields() {
        let raw = input.get(field.name);

        let value = match &field.coercion {
            None => FieldValue::Text(raw.to_string()),
            Some(coercion) => match coercion.apply(raw) {
                Ok(value) => value,
                Err(message) => {
                    field_errors.insert(field.name.to_string(), vec![message.to_string()]);
                    continue;
                }
            },
        };

        let failures: Vec<String> = field
            .constraints
            .iter()
            .filter(|c| !c.rule.holds(&value))
            .map(|c| c.message.to_string())
            .collect();

        if failures.is_empty() {
            record.insert(field.name, value);
        } else {
            field_errors.insert(field.name.to_string(), failures);
        }
    }

    if !field_errors.is_empty() {
        return invalid(schema, field_errors);
    }

    match T::from_record(record) {
        Ok(data) => ValidationOutcome::Valid { data },
        Err(err) => {
            let field = err.field().unwrap_or("form").to_string();
            let mut field_errors = FieldErrors::new();
            field_errors.insert(field, vec![err.to_string()]);
            invalid(schema, field_errors)
        }
    }
}

fn invalid<T>(schema: &EntitySchema, field_errors: FieldErrors) -> ValidationOutcome<T> {
    ValidationOutcome::Invalid {
        field_errors,
        message: schema.failure_message().to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{InvoiceForm, LoginForm, RegistrationForm};
    use crate::registry::{self, fields, messages};
    use crate::schema::{FieldKind, FieldSchema, Rule};
    use crate::types::InvoiceStatus;

    fn invoice_input(customer: &str, amount: &str, status: &str) -> FormInput {
        FormInput::from_pairs([
            (fields::CUSTOMER_ID, customer),
            (fields::AMOUNT, amount),
            (fields::STATUS, status),
        ])
    }

    fn registration(name: &str, email: &str, password: &str, confirm: &str) -> FormInput {
        FormInput::from_pairs([
            (fields::NAME, name),
            (fields::EMAIL, email),
            (fields::PASSWORD, password),
            (fields::CONFIRM_PASSWORD, confirm),
        ])
    }

    #[test]
    fn test_valid_invoice_is_coerced() {
        let input = invoice_input("c-1", "12.50", "paid");
        let outcome = validate::<InvoiceForm>(registry::invoice_create(), &input);

        let ValidationOutcome::Valid { data } = outcome else {
            panic!("expected a valid outcome");
        };
        assert_eq!(data.customer_id, "c-1");
        assert_eq!(data.amount, 12.5);
        assert_eq!(data.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_empty_invoice_reports_every_field() {
        let outcome = validate::<InvoiceForm>(registry::invoice_create(), &FormInput::new());

        let ValidationOutcome::Invalid {
            field_errors,
            message,
        } = outcome
        else {
            panic!("expected an invalid outcome");
        };
        assert_eq!(message, messages::CREATE_INVOICE_MISSING);
        assert_eq!(field_errors[fields::CUSTOMER_ID], [messages::SELECT_CUSTOMER]);
        assert_eq!(field_errors[fields::AMOUNT], [messages::AMOUNT_POSITIVE]);
        assert_eq!(field_errors[fields::STATUS], [messages::SELECT_STATUS]);
    }

    #[test]
    fn test_update_schema_uses_update_message() {
        let input = invoice_input("c-1", "", "paid");
        let outcome = validate::<InvoiceForm>(registry::invoice_update(), &input);
        let ValidationOutcome::Invalid { message, .. } = outcome else {
            panic!("expected an invalid outcome");
        };
        assert_eq!(message, messages::UPDATE_INVOICE_MISSING);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in ["0", "-5", "-0.01", "0.00", "0.004"] {
            let input = invoice_input("c-1", amount, "pending");
            let outcome = validate::<InvoiceForm>(registry::invoice_create(), &input);
            let errors = outcome.field_errors().expect("amount should be rejected");
            assert_eq!(errors[fields::AMOUNT], [messages::AMOUNT_POSITIVE], "amount {amount:?}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_smallest_amount_is_one_cent() {
        let input = invoice_input("c-1", "0.005", "pending");
        let outcome = validate::<InvoiceForm>(registry::invoice_create(), &input);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_out_of_range_amount_is_invalid() {
        for amount in ["1e17", "99999999999999999999", "-1e17", "90071992547410"] {
            let input = invoice_input("c-1", amount, "paid");
            let outcome = validate::<InvoiceForm>(registry::invoice_create(), &input);
            let errors = outcome.field_errors().expect("amount should be rejected");
            assert_eq!(errors[fields::AMOUNT], [messages::INVALID_AMOUNT], "amount {amount:?}");
        }

        let input = invoice_input("c-1", "90071992547409", "paid");
        assert!(validate::<InvoiceForm>(registry::invoice_create(), &input).is_valid());
    }

    #[test]
    fn test_non_numeric_amount_is_a_field_error() {
        let input = invoice_input("c-1", "twelve", "paid");
        let outcome = validate::<InvoiceForm>(registry::invoice_create(), &input);
        let errors = outcome.field_errors().unwrap();
        assert_eq!(errors[fields::AMOUNT], [messages::INVALID_AMOUNT]);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let input = invoice_input("c-1", "5", "overdue");
        let outcome = validate::<InvoiceForm>(registry::invoice_create(), &input);
        let errors = outcome.field_errors().unwrap();
        assert_eq!(errors[fields::STATUS], [messages::SELECT_STATUS]);
        assert!(!errors.contains_key(fields::AMOUNT));
    }

    #[test]
    fn test_name_accumulates_all_failures() {
        let outcome = validate::<RegistrationForm>(
            registry::user_create(),
            &registration("", "a@b.com", "secret1", "secret1"),
        );
        let errors = outcome.field_errors().unwrap();
        assert_eq!(
            errors[fields::NAME],
            [
                messages::NAME_REQUIRED,
                messages::NAME_TOO_SHORT,
                messages::NAME_LETTERS
            ]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_name_failures_keep_declared_order() {
        let outcome = validate::<RegistrationForm>(
            registry::user_create(),
            &registration("A1", "a@b.com", "secret1", "secret1"),
        );
        let errors = outcome.field_errors().unwrap();
        assert_eq!(errors[fields::NAME], [messages::NAME_TOO_SHORT, messages::NAME_LETTERS]);
    }

    #[test]
    fn test_short_passwords_are_checked_independently() {
        let outcome = validate::<RegistrationForm>(
            registry::user_create(),
            &registration("Grace", "grace@example.com", "abc", "abc"),
        );
        let errors = outcome.field_errors().unwrap();
        assert_eq!(errors[fields::PASSWORD], [messages::PASSWORD_TOO_SHORT]);
        assert_eq!(errors[fields::CONFIRM_PASSWORD], [messages::PASSWORD_TOO_SHORT]);
        assert_eq!(
            outcome.into_result().unwrap_err().message.as_deref(),
            Some(messages::CREATE_USER_MISSING)
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        let outcome = validate::<RegistrationForm>(
            registry::user_create(),
            &registration("Grace", "grace-at-example", "secret1", "secret1"),
        );
        assert_eq!(outcome.field_errors().unwrap()[fields::EMAIL], [messages::INVALID_EMAIL]);
    }

    #[test]
    fn test_mismatched_passwords_still_validate() {
        // Equality is a business rule, not a schema constraint.
        let outcome = validate::<RegistrationForm>(
            registry::user_create(),
            &registration("Grace", "grace@example.com", "secret1", "secret2"),
        );
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_login_form() {
        let input =
            FormInput::from_pairs([(fields::EMAIL, "a@b.com"), (fields::PASSWORD, "secret1")]);
        let outcome = validate::<LoginForm>(registry::user_login(), &input);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_extraction_fault_becomes_field_error() {
        // A schema that does not declare a field the typed form needs.
        let schema = EntitySchema::new(
            "broken",
            "Broken form.",
            vec![
                FieldSchema::new(fields::CUSTOMER_ID, FieldKind::String)
                    .rule(Rule::NonEmpty, "required"),
            ],
        );
        let outcome = validate::<InvoiceForm>(&schema, &invoice_input("c-1", "5", "paid"));

        let ValidationOutcome::Invalid {
            field_errors,
            message,
        } = outcome
        else {
            panic!("expected an invalid outcome");
        };
        assert_eq!(message, "Broken form.");
        assert_eq!(field_errors[fields::AMOUNT], ["amount is missing"]);
    }

    #[test]
    fn test_form_input_absent_fields_read_as_empty() {
        let input: FormInput = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(input.get("name"), "Ada");
        assert_eq!(input.get("email"), "");
        assert!(!input.contains("email"));
    }
}
