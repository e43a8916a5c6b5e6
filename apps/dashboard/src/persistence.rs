//! # Persistence Adapter
//!
//! [`FormStore`] over the SQLite [`Database`].
//!
//! ## Error Downgrade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DbError::UniqueViolation { field: "users.email", .. }                 │
//! │       │                                                                 │
//! │       ├──► error!(operation, error) ← full detail stays in the log     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PersistenceFailure("Database Error: Failed to Create User.")          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SubmissionResult { message } ← all the form ever sees                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use tracing::error;

use tally_core::{InvoiceChanges, NewInvoice, NewUser, User};
use tally_db::{Database, DbError, DbResult};

use crate::ports::store::{FormStore, PersistenceFailure};

pub const CREATE_USER_FAILED: &str = "Database Error: Failed to Create User.";
pub const CREATE_INVOICE_FAILED: &str = "Database Error: Failed to Create Invoice.";
pub const UPDATE_INVOICE_FAILED: &str = "Database Error: Failed to Update Invoice.";
pub const DELETE_INVOICE_FAILED: &str = "Database Error: Failed to Delete Invoice.";

fn downgrade(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(DbError) -> PersistenceFailure {
    move |err| {
        error!(operation = operation, error = %err, "Database mutation failed");
        PersistenceFailure { message }
    }
}

#[async_trait]
impl FormStore for Database {
    async fn find_user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        self.users().find_by_email(email).await
    }

    async fn insert_user(&self, user: NewUser) -> Result<(), PersistenceFailure> {
        self.users()
            .insert(&user)
            .await
            .map(drop)
            .map_err(downgrade("insert_user", CREATE_USER_FAILED))
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<(), PersistenceFailure> {
        self.invoices()
            .insert(&invoice)
            .await
            .map(drop)
            .map_err(downgrade("insert_invoice", CREATE_INVOICE_FAILED))
    }

    async fn update_invoice(
        &self,
        id: &str,
        changes: InvoiceChanges,
    ) -> Result<(), PersistenceFailure> {
        self.invoices()
            .update(id, &changes)
            .await
            .map_err(downgrade("update_invoice", UPDATE_INVOICE_FAILED))
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), PersistenceFailure> {
        self.invoices()
            .delete(id)
            .await
            .map_err(downgrade("delete_invoice", DELETE_INVOICE_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{InvoiceStatus, Money};
    use tally_db::DbConfig;

    async fn database() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Grace".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_user_is_downgraded() {
        let db = database().await;

        db.insert_user(new_user("grace@example.com")).await.unwrap();
        let failure = db.insert_user(new_user("grace@example.com")).await.unwrap_err();

        assert_eq!(failure.message, CREATE_USER_FAILED);
    }

    #[tokio::test]
    async fn test_lookup_passes_through() {
        let db = database().await;
        assert!(db.find_user_by_email("grace@example.com").await.unwrap().is_none());

        db.insert_user(new_user("grace@example.com")).await.unwrap();
        let user = db.find_user_by_email("grace@example.com").await.unwrap().unwrap();
        assert_eq!(user.name, "Grace");
    }

    #[tokio::test]
    async fn test_invoice_failures_are_downgraded() {
        let db = database().await;
        let invoice = NewInvoice {
            customer_id: "no-such-customer".to_string(),
            amount: Money::from_cents(100),
            status: InvoiceStatus::Pending,
            date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
        };
        let changes = InvoiceChanges {
            customer_id: "no-such-customer".to_string(),
            amount: Money::from_cents(100),
            status: InvoiceStatus::Paid,
        };

        assert_eq!(db.insert_invoice(invoice).await.unwrap_err().message, CREATE_INVOICE_FAILED);
        assert_eq!(
            db.update_invoice("missing", changes).await.unwrap_err().message,
            UPDATE_INVOICE_FAILED
        );
        assert_eq!(db.delete_invoice("missing").await.unwrap_err().message, DELETE_INVOICE_FAILED);
    }
}
