//! # Schema Registry
//!
//! The immutable schemas for every form the dashboard accepts, keyed by
//! entity + operation.
//!
//! ## Registered Schemas
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────────────┐
//! │  (Invoice, Create)   │  customerId, amount, status                      │
//! │  (Invoice, Update)   │  same shape; the id travels outside the form     │
//! │  (User, Create)      │  name, email, password, confirmPassword          │
//! │  (User, Login)       │  email, password                                 │
//! └──────────────────────┴──────────────────────────────────────────────────┘
//! ```
//!
//! Invoice `id` and `date` are never form fields: the date is generated at
//! creation and the id is supplied separately for update and delete.

use std::sync::LazyLock;

use crate::money::Money;
use crate::schema::{Coercion, EntitySchema, FieldKind, FieldSchema, Pattern, Rule};

// =============================================================================
// Keys
// =============================================================================

/// Entity a form describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Invoice,
    User,
}

/// Operation a form performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Login,
}

// =============================================================================
// Field Names
// =============================================================================

pub mod fields {
    pub const CUSTOMER_ID: &str = "customerId";
    pub const AMOUNT: &str = "amount";
    pub const STATUS: &str = "status";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

// =============================================================================
// Messages
// =============================================================================

/// User-facing text shown next to fields or above the form.
pub mod messages {
    pub const SELECT_CUSTOMER: &str = "Please select a customer.";
    pub const INVALID_AMOUNT: &str = "Please enter a valid amount.";
    pub const AMOUNT_POSITIVE: &str = "Please enter an amount greater than $0.";
    pub const SELECT_STATUS: &str = "Please select an invoice status.";
    pub const CREATE_INVOICE_MISSING: &str = "Missing Fields. Failed to Create Invoice.";
    pub const UPDATE_INVOICE_MISSING: &str = "Missing Fields. Failed to Update Invoice.";

    pub const NAME_REQUIRED: &str = "Name is required.";
    pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters.";
    pub const NAME_LETTERS: &str = "Name must contain only letters.";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
    pub const CREATE_USER_MISSING: &str = "Missing Fields. Failed to Create User.";

    pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
}

/// Minimum password length for registration and login.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum display name length.
pub const MIN_NAME_LENGTH: usize = 3;

// =============================================================================
// Schemas
// =============================================================================

fn invoice_fields() -> Vec<FieldSchema> {
    use messages::*;

    let statuses: &'static [&'static str] = &["pending", "paid"];

    vec![
        FieldSchema::new(fields::CUSTOMER_ID, FieldKind::String)
            .rule(Rule::NonEmpty, SELECT_CUSTOMER),
        // Amounts that round to 0 cents are not "> 0" once stored.
        FieldSchema::new(fields::AMOUNT, FieldKind::Number)
            .coerce(Coercion::ToNumber {
                limit: Money::MAX_MAJOR_UNITS,
                message: INVALID_AMOUNT,
            })
            .rule(Rule::PositiveCents, AMOUNT_POSITIVE),
        FieldSchema::new(fields::STATUS, FieldKind::Enum)
            .rule(Rule::OneOf(statuses), SELECT_STATUS),
    ]
}

static INVOICE_CREATE: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::new(
        "invoice/create",
        messages::CREATE_INVOICE_MISSING,
        invoice_fields(),
    )
});

static INVOICE_UPDATE: LazyLock<EntitySchema> = LazyLock::new(|| {
    EntitySchema::new(
        "invoice/update",
        messages::UPDATE_INVOICE_MISSING,
        invoice_fields(),
    )
});

static USER_CREATE: LazyLock<EntitySchema> = LazyLock::new(|| {
    use messages::*;

    EntitySchema::new(
        "user/create",
        CREATE_USER_MISSING,
        vec![
            FieldSchema::new(fields::NAME, FieldKind::String)
                .rule(Rule::NonEmpty, NAME_REQUIRED)
                .rule(Rule::MinLength(MIN_NAME_LENGTH), NAME_TOO_SHORT)
                .rule(Rule::Matches(Pattern::Letters), NAME_LETTERS),
            FieldSchema::new(fields::EMAIL, FieldKind::Email).rule(Rule::Email, INVALID_EMAIL),
            FieldSchema::new(fields::PASSWORD, FieldKind::String)
                .rule(Rule::MinLength(MIN_PASSWORD_LENGTH), PASSWORD_TOO_SHORT),
            // Same constraint as password, checked independently; equality is
            // a business rule that runs after validation.
            FieldSchema::new(fields::CONFIRM_PASSWORD, FieldKind::String)
                .rule(Rule::MinLength(MIN_PASSWORD_LENGTH), PASSWORD_TOO_SHORT),
        ],
    )
});

static USER_LOGIN: LazyLock<EntitySchema> = LazyLock::new(|| {
    use messages::*;

    EntitySchema::new(
        "user/login",
        INVALID_CREDENTIALS,
        vec![
            FieldSchema::new(fields::EMAIL, FieldKind::Email).rule(Rule::Email, INVALID_EMAIL),
            FieldSchema::new(fields::PASSWORD, FieldKind::String)
                .rule(Rule::MinLength(MIN_PASSWORD_LENGTH), PASSWORD_TOO_SHORT),
        ],
    )
});

// =============================================================================
// Lookup
// =============================================================================

/// Returns the schema registered for an entity + operation pair.
///
/// ## Example
/// ```rust
/// use tally_core::registry::{schema, Entity, Operation};
///
/// assert!(schema(Entity::Invoice, Operation::Update).is_some());
/// assert!(schema(Entity::User, Operation::Update).is_none());
/// ```
pub fn schema(entity: Entity, operation: Operation) -> Option<&'static EntitySchema> {
    match (entity, operation) {
        (Entity::Invoice, Operation::Create) => Some(invoice_create()),
        (Entity::Invoice, Operation::Update) => Some(invoice_update()),
        (Entity::User, Operation::Create) => Some(user_create()),
        (Entity::User, Operation::Login) => Some(user_login()),
        _ => None,
    }
}

/// Invoice creation form.
pub fn invoice_create() -> &'static EntitySchema {
    &INVOICE_CREATE
}

/// Invoice edit form.
pub fn invoice_update() -> &'static EntitySchema {
    &INVOICE_UPDATE
}

/// Registration form.
pub fn user_create() -> &'static EntitySchema {
    &USER_CREATE
}

/// Sign-in form.
pub fn user_login() -> &'static EntitySchema {
    &USER_LOGIN
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_pairs() {
        let name = |entity, operation| schema(entity, operation).map(EntitySchema::name);

        assert_eq!(name(Entity::Invoice, Operation::Create), Some("invoice/create"));
        assert_eq!(name(Entity::Invoice, Operation::Update), Some("invoice/update"));
        assert_eq!(name(Entity::User, Operation::Create), Some("user/create"));
        assert_eq!(name(Entity::User, Operation::Login), Some("user/login"));
        assert!(schema(Entity::User, Operation::Update).is_none());
        assert!(schema(Entity::Invoice, Operation::Login).is_none());
    }

    #[test]
    fn test_invoice_schemas_share_shape() {
        let create = invoice_create();
        let update = invoice_update();

        assert_eq!(create.fields(), update.fields());
        assert_ne!(create.failure_message(), update.failure_message());

        let names: Vec<_> = create.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["customerId", "amount", "status"]);
        assert!(create.field("id").is_none());
        assert!(create.field("date").is_none());
    }

    #[test]
    fn test_user_schema_field_order() {
        let names: Vec<_> = user_create().fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "password", "confirmPassword"]);

        let password = user_create().field(fields::PASSWORD).unwrap();
        let confirm = user_create().field(fields::CONFIRM_PASSWORD).unwrap();
        assert_eq!(password.constraints, confirm.constraints);
    }

    #[test]
    fn test_amount_is_coerced() {
        let amount = invoice_create().field(fields::AMOUNT).unwrap();
        assert_eq!(amount.kind, FieldKind::Number);
        assert!(amount.coercion.is_some());
    }
}
