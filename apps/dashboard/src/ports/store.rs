//! Persistence boundary.

use async_trait::async_trait;
use tally_core::{InvoiceChanges, NewInvoice, NewUser, SubmissionResult, User};
use tally_db::DbResult;

/// A mutation that failed and was already logged by the adapter.
///
/// Carries only the generic user-facing message; store details never reach
/// the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceFailure {
    pub message: &'static str,
}

impl From<PersistenceFailure> for SubmissionResult {
    fn from(failure: PersistenceFailure) -> Self {
        SubmissionResult::message(failure.message)
    }
}

/// Storage operations a submission may perform. Each is one statement.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Exact-match lookup. Absence is `Ok(None)`; errors are fatal to the
    /// caller.
    async fn find_user_by_email(&self, email: &str) -> DbResult<Option<User>>;

    async fn insert_user(&self, user: NewUser) -> Result<(), PersistenceFailure>;

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<(), PersistenceFailure>;

    async fn update_invoice(
        &self,
        id: &str,
        changes: InvoiceChanges,
    ) -> Result<(), PersistenceFailure>;

    async fn delete_invoice(&self, id: &str) -> Result<(), PersistenceFailure>;
}
