//! # Schema Building Blocks
//!
//! Declarative field schemas: a data-driven rule table evaluated by the
//! validator, not a validator class hierarchy.
//!
//! ## Shape
//! ```text
//! EntitySchema "invoice/create"
//! ├── failure_message: "Missing Fields. Failed to Create Invoice."
//! ├── FieldSchema customerId  (string)
//! │   └── NonEmpty            → "Please select a customer."
//! ├── FieldSchema amount      (number, coerce string → number)
//! │   └── PositiveCents       → "Please enter an amount greater than $0."
//! └── FieldSchema status      (enum)
//!     └── OneOf[pending,paid] → "Please select an invoice status."
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::money::Money;

// =============================================================================
// Field Values
// =============================================================================

/// A field value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

// =============================================================================
// Kinds, Coercions, Rules
// =============================================================================

/// The primitive kind a field declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Enum,
    Email,
}

/// Conversion applied to the raw text before constraints run.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// Parse the text as a decimal number whose magnitude is at most `limit`.
    ///
    /// Whitespace is trimmed and the empty string becomes 0, so a blank
    /// amount fails the "> 0" constraint instead of the parse. Non-numeric,
    /// non-finite and out-of-range input fails with `message`.
    ToNumber { limit: f64, message: &'static str },
}

impl Coercion {
    /// Applies the coercion, returning the failure message on error.
    pub fn apply(&self, raw: &str) -> Result<FieldValue, &'static str> {
        match self {
            Coercion::ToNumber { limit, message } => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(FieldValue::Number(0.0));
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() && n.abs() <= *limit => Ok(FieldValue::Number(n)),
                    _ => Err(*message),
                }
            }
        }
    }
}

/// A named text pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// ASCII letters only, at least one.
    Letters,
}

static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("invalid letters pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("invalid email pattern")
});

impl Pattern {
    fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Letters => LETTERS.is_match(text),
        }
    }
}

/// Returns true when `text` is a syntactically valid email address.
///
/// The regex crate has no lookahead, so the leading-dot and `..` checks on
/// the local part run outside the pattern.
pub fn is_valid_email(text: &str) -> bool {
    !text.starts_with('.') && !text.contains("..") && EMAIL.is_match(text)
}

/// A predicate over one coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Text is not empty.
    NonEmpty,
    /// Text has at least this many characters.
    MinLength(usize),
    /// Text matches a named pattern.
    Matches(Pattern),
    /// Text is a valid email address.
    Email,
    /// Text is one of the listed choices.
    OneOf(&'static [&'static str]),
    /// Number is at least one cent after rounding to whole cents.
    PositiveCents,
}

impl Rule {
    /// Evaluates the rule. A rule applied to the wrong value type fails.
    pub fn holds(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Rule::NonEmpty, FieldValue::Text(s)) => !s.is_empty(),
            (Rule::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= *min,
            (Rule::Matches(pattern), FieldValue::Text(s)) => pattern.matches(s),
            (Rule::Email, FieldValue::Text(s)) => is_valid_email(s),
            (Rule::OneOf(choices), FieldValue::Text(s)) => choices.contains(&s.as_str()),
            (Rule::PositiveCents, FieldValue::Number(n)) => {
                Money::from_major_units(*n).is_positive()
            }
            _ => false,
        }
    }
}

/// A rule paired with the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub rule: Rule,
    pub message: &'static str,
}

impl Constraint {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Constraint { rule, message }
    }
}

// =============================================================================
// Field & Entity Schemas
// =============================================================================

/// Schema of one form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub coercion: Option<Coercion>,
    /// Evaluated in order; every failing message is reported.
    pub constraints: Vec<Constraint>,
}

impl FieldSchema {
    /// Starts a field schema with no coercion and no constraints.
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldSchema {
            name,
            kind,
            coercion: None,
            constraints: Vec::new(),
        }
    }

    /// Sets the coercion rule.
    pub fn coerce(mut self, coercion: Coercion) -> Self {
        self.coercion = Some(coercion);
        self
    }

    /// Appends a constraint.
    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.constraints.push(Constraint::new(rule, message));
        self
    }
}

/// An ordered set of field schemas for one entity + operation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySchema {
    name: &'static str,
    failure_message: &'static str,
    fields: Vec<FieldSchema>,
}

impl EntitySchema {
    /// Builds a schema.
    ///
    /// ## Panics
    /// If two fields share a name. Schemas are static definitions, so this
    /// fires the first time the registry is touched, in any test.
    pub fn new(
        name: &'static str,
        failure_message: &'static str,
        fields: Vec<FieldSchema>,
    ) -> Self {
        for (i, field) in fields.iter().enumerate() {
            assert!(
                fields[..i].iter().all(|f| f.name != field.name),
                "duplicate field {} in schema {}",
                field.name,
                name
            );
        }
        EntitySchema {
            name,
            failure_message,
            fields,
        }
    }

    /// Identifier such as `invoice/create`, for logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Top-level message attached to an `Invalid` outcome.
    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
