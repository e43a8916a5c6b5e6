//! # Authentication
//!
//! ```text
//! FormInput ──► login schema ──► lookup by email ──► verify hash ──► User
//!                  │ invalid          │ none             │ mismatch
//!                  └──────────────────┴──────────────────┴──► InvalidCredentials
//! ```
//!
//! Every "wrong input" path collapses to one error so the response never
//! reveals whether an email is registered.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use tally_core::forms::LoginForm;
use tally_core::registry;
use tally_core::validation::{validate, FormInput, ValidationOutcome};
use tally_core::User;

use super::hasher::CredentialHasher;
use super::store::FormStore;
use crate::error::AuthError;

/// Authentication boundary.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verifies the submitted credentials and returns the signed-in user.
    async fn sign_in(&self, credentials: &FormInput) -> Result<User, AuthError>;
}

/// Email + password authentication against the user store.
#[derive(Clone)]
pub struct CredentialsProvider {
    store: Arc<dyn FormStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl CredentialsProvider {
    pub fn new(store: Arc<dyn FormStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        CredentialsProvider { store, hasher }
    }
}

#[async_trait]
impl Authenticator for CredentialsProvider {
    async fn sign_in(&self, credentials: &FormInput) -> Result<User, AuthError> {
        let login = match validate::<LoginForm>(registry::user_login(), credentials) {
            ValidationOutcome::Valid { data } => data,
            ValidationOutcome::Invalid { .. } => {
                debug!("Login form failed validation");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let Some(user) = self.store.find_user_by_email(&login.email).await? else {
            debug!("No user for login email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(&login.password, &user.password)? {
            debug!(user_id = %user.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Argon2Hasher;
    use crate::testing::FakeStore;

    fn login(email: &str, password: &str) -> FormInput {
        FormInput::from_pairs([("email", email), ("password", password)])
    }

    fn provider(store: FakeStore) -> CredentialsProvider {
        CredentialsProvider::new(Arc::new(store), Arc::new(Argon2Hasher::new(1)))
    }

    fn stored_user(password: &str) -> User {
        User {
            id: "u-1".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: Argon2Hasher::new(1).hash(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let auth = provider(FakeStore::with_user(stored_user("hunter22")));
        let user = auth.sign_in(&login("grace@example.com", "hunter22")).await.unwrap();
        assert_eq!(user.id, "u-1");
    }

    #[tokio::test]
    async fn test_wrong_inputs_are_invalid_credentials() {
        let auth = provider(FakeStore::with_user(stored_user("hunter22")));

        for (email, password) in [
            ("grace@example.com", "hunter23"),
            ("nobody@example.com", "hunter22"),
            ("not-an-email", "hunter22"),
            ("grace@example.com", "short"),
        ] {
            let result = auth.sign_in(&login(email, password)).await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)), "{email} / {password}");
        }
    }

    #[tokio::test]
    async fn test_invalid_form_skips_lookup() {
        let store = Arc::new(FakeStore::default());
        let auth = CredentialsProvider::new(store.clone(), Arc::new(Argon2Hasher::new(1)));

        let _ = auth.sign_in(&login("", "")).await;
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_invalid_credentials() {
        let auth = provider(FakeStore::failing_lookup());
        let result = auth.sign_in(&login("grace@example.com", "hunter22")).await;
        assert!(matches!(result, Err(AuthError::Store(_))));
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_is_hashing_error() {
        let mut user = stored_user("hunter22");
        user.password = "plaintext?".to_string();
        let auth = provider(FakeStore::with_user(user));

        let result = auth.sign_in(&login("grace@example.com", "hunter22")).await;
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }
}
