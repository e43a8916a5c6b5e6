//! # Submission Orchestrators
//!
//! One function per form. Each runs a fixed sequence and stops at the first
//! terminal outcome.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FormInput                                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  validate ─── Invalid ──────────────────► ValidationFailed (returned)  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  business rules ─── violated ───────────► BusinessRuleFailed           │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  persist ─── PersistenceFailure ────────► PersistenceFailed (message)  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  revalidate(view) → navigate(view) ─────► Succeeded (None)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calls to the store are sequential; an orchestrator holds no state between
//! submissions.

pub mod auth;
pub mod invoice;
pub mod user;

pub use auth::authenticate;
pub use invoice::{create_invoice, delete_invoice, update_invoice, DELETED_INVOICE};
pub use user::register_user;

use tally_core::schema::EntitySchema;
use tally_core::validation::{validate, FormInput, FromRecord};
use tally_core::SubmissionResult;
use tracing::warn;

/// Validates `form`, logging a rejection without any submitted values.
fn validated<T: FromRecord>(
    schema: &EntitySchema,
    form: &FormInput,
) -> Result<T, SubmissionResult> {
    validate::<T>(schema, form).into_result().map_err(|result| {
        if let Some(errors) = &result.errors {
            let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
            warn!(schema = schema.name(), fields = ?fields, "Form rejected");
        }
        result
    })
}

// =============================================================================
// End-to-end Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{views, Argon2Hasher, CredentialsProvider, FormStore};
    use crate::testing::{RecordingSignals, Signal};
    use std::sync::Arc;
    use tally_core::InvoiceStatus;
    use tally_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_register_then_login() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let hasher = Argon2Hasher::new(1);
        let signals = RecordingSignals::default();

        let form = FormInput::from_pairs([
            ("name", "Grace"),
            ("email", "grace@example.com"),
            ("password", "hunter22"),
            ("confirmPassword", "hunter22"),
        ]);
        assert_eq!(register_user(&db, &hasher, &signals, &form).await.unwrap(), None);

        let stored = db.find_user_by_email("grace@example.com").await.unwrap().unwrap();
        assert_ne!(stored.password, "hunter22");

        // Same email again: rejected by the duplicate check, not the database
        let again = register_user(&db, &hasher, &signals, &form).await.unwrap().unwrap();
        assert_eq!(again.errors_for("email"), ["Email already in use."]);

        let auth = CredentialsProvider::new(Arc::new(db.clone()), Arc::new(hasher));
        let login =
            FormInput::from_pairs([("email", "grace@example.com"), ("password", "hunter22")]);
        assert_eq!(authenticate(&auth, &signals, &login).await.unwrap(), None);

        let wrong =
            FormInput::from_pairs([("email", "grace@example.com"), ("password", "hunter23")]);
        assert_eq!(
            authenticate(&auth, &signals, &wrong).await.unwrap().as_deref(),
            Some("Invalid credentials.")
        );

        assert_eq!(
            signals.events(),
            [
                Signal::Revalidate(views::LOGIN.to_string()),
                Signal::Navigate(views::LOGIN.to_string()),
                Signal::Navigate(views::DASHBOARD.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_invoice_lifecycle() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customer = db
            .customers()
            .insert("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png")
            .await
            .unwrap();
        let signals = RecordingSignals::default();

        let form = FormInput::from_pairs([
            ("customerId", customer.id.as_str()),
            ("amount", "12.50"),
            ("status", "pending"),
        ]);
        assert_eq!(create_invoice(&db, &signals, &form).await, None);

        let listing = db.invoices().search("", 1).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].amount, 1250);
        let id = listing[0].id.clone();

        let edit = FormInput::from_pairs([
            ("customerId", customer.id.as_str()),
            ("amount", "99.99"),
            ("status", "paid"),
        ]);
        assert_eq!(update_invoice(&db, &signals, &id, &edit).await, None);

        let updated = db.invoices().get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(updated.amount, 9999);
        assert_eq!(updated.status, InvoiceStatus::Paid);

        let deleted = delete_invoice(&db, &signals, &id).await;
        assert_eq!(deleted.message.as_deref(), Some(DELETED_INVOICE));

        let missing = delete_invoice(&db, &signals, &id).await;
        assert_eq!(
            missing.message.as_deref(),
            Some("Database Error: Failed to Delete Invoice.")
        );
    }

    #[tokio::test]
    async fn test_unknown_customer_is_database_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let signals = RecordingSignals::default();

        let form = FormInput::from_pairs([
            ("customerId", "no-such-customer"),
            ("amount", "5"),
            ("status", "paid"),
        ]);
        let result = create_invoice(&db, &signals, &form).await.unwrap();

        assert_eq!(result, SubmissionResult::message("Database Error: Failed to Create Invoice."));
        assert!(signals.events().is_empty());
    }
}
