//! Recording fakes for the ports.

use async_trait::async_trait;
use std::sync::Mutex;

use tally_core::validation::FormInput;
use tally_core::{InvoiceChanges, NewInvoice, NewUser, User};
use tally_db::{DbError, DbResult};

use crate::error::{AuthError, HashError};
use crate::persistence::{
    CREATE_INVOICE_FAILED, CREATE_USER_FAILED, DELETE_INVOICE_FAILED, UPDATE_INVOICE_FAILED,
};
use crate::ports::{Authenticator, CredentialHasher, FormStore, PersistenceFailure, Signals};

// =============================================================================
// Store
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    FindUser(String),
    InsertUser(NewUser),
    InsertInvoice(NewInvoice),
    UpdateInvoice(String, InvoiceChanges),
    DeleteInvoice(String),
}

#[derive(Debug, Default)]
pub struct FakeStore {
    user: Option<User>,
    fail_lookup: bool,
    fail_writes: bool,
    calls: Mutex<Vec<StoreCall>>,
}

impl FakeStore {
    /// A store where `user` is the only registered user.
    pub fn with_user(user: User) -> Self {
        FakeStore {
            user: Some(user),
            ..FakeStore::default()
        }
    }

    /// A store whose email lookup errors.
    pub fn failing_lookup() -> Self {
        FakeStore {
            fail_lookup: true,
            ..FakeStore::default()
        }
    }

    /// A store whose mutations all fail.
    pub fn failing_writes() -> Self {
        FakeStore {
            fail_writes: true,
            ..FakeStore::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn write(&self, call: StoreCall, message: &'static str) -> Result<(), PersistenceFailure> {
        self.record(call);
        if self.fail_writes {
            Err(PersistenceFailure { message })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FormStore for FakeStore {
    async fn find_user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        self.record(StoreCall::FindUser(email.to_string()));
        if self.fail_lookup {
            return Err(DbError::ConnectionFailed("store offline".to_string()));
        }
        Ok(self.user.clone().filter(|user| user.email == email))
    }

    async fn insert_user(&self, user: NewUser) -> Result<(), PersistenceFailure> {
        self.write(StoreCall::InsertUser(user), CREATE_USER_FAILED)
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<(), PersistenceFailure> {
        self.write(StoreCall::InsertInvoice(invoice), CREATE_INVOICE_FAILED)
    }

    async fn update_invoice(
        &self,
        id: &str,
        changes: InvoiceChanges,
    ) -> Result<(), PersistenceFailure> {
        self.write(StoreCall::UpdateInvoice(id.to_string(), changes), UPDATE_INVOICE_FAILED)
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), PersistenceFailure> {
        self.write(StoreCall::DeleteInvoice(id.to_string()), DELETE_INVOICE_FAILED)
    }
}

// =============================================================================
// Hasher
// =============================================================================

/// Reversible stand-in: `hash(p) = "hashed:" + p`.
#[derive(Debug, Default)]
pub struct FakeHasher {
    fail: bool,
    hashed: Mutex<Vec<String>>,
}

impl FakeHasher {
    pub fn failing() -> Self {
        FakeHasher {
            fail: true,
            ..FakeHasher::default()
        }
    }

    /// Plaintexts passed to `hash`, in order.
    pub fn hashed(&self) -> Vec<String> {
        self.hashed.lock().unwrap().clone()
    }
}

impl CredentialHasher for FakeHasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        self.hashed.lock().unwrap().push(plaintext.to_string());
        if self.fail {
            return Err(HashError::Hash("hasher unavailable".to_string()));
        }
        Ok(format!("hashed:{plaintext}"))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash.strip_prefix("hashed:") == Some(plaintext))
    }
}

// =============================================================================
// Authenticator
// =============================================================================

#[derive(Debug, Clone)]
pub enum FakeAuthenticator {
    Accepting(User),
    Rejecting,
    Failing,
}

#[async_trait]
impl Authenticator for FakeAuthenticator {
    async fn sign_in(&self, _credentials: &FormInput) -> Result<User, AuthError> {
        match self {
            FakeAuthenticator::Accepting(user) => Ok(user.clone()),
            FakeAuthenticator::Rejecting => Err(AuthError::InvalidCredentials),
            FakeAuthenticator::Failing => Err(AuthError::Store(DbError::PoolExhausted)),
        }
    }
}

// =============================================================================
// Signals
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Revalidate(String),
    Navigate(String),
}

#[derive(Debug, Default)]
pub struct RecordingSignals {
    events: Mutex<Vec<Signal>>,
}

impl RecordingSignals {
    pub fn events(&self) -> Vec<Signal> {
        self.events.lock().unwrap().clone()
    }
}

impl Signals for RecordingSignals {
    fn revalidate(&self, view: &str) {
        self.events.lock().unwrap().push(Signal::Revalidate(view.to_string()));
    }

    fn navigate(&self, view: &str) {
        self.events.lock().unwrap().push(Signal::Navigate(view.to_string()));
    }
}
