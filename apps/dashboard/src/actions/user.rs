//! User registration.
//!
//! ```text
//! validate → passwords match → email free → hash → insert → /login
//!                  │               │           │       │
//!                  ▼               ▼           ▼       ▼
//!          confirmPassword     email       fatal   "Database Error:
//!              error           error               Failed to Create User."
//! ```

use tracing::{info, warn};

use tally_core::forms::RegistrationForm;
use tally_core::validation::FormInput;
use tally_core::{registry, rules, NewUser, SubmissionResult};

use super::validated;
use crate::error::ActionError;
use crate::ports::{views, CredentialHasher, FormStore, Signals};

/// Registers a user.
///
/// ## Returns
/// * `Ok(None)` - Stored; navigated to the login view
/// * `Ok(Some(result))` - Form state to re-render
/// * `Err(ActionError)` - The email lookup or hashing failed
pub async fn register_user(
    store: &dyn FormStore,
    hasher: &dyn CredentialHasher,
    signals: &dyn Signals,
    form: &FormInput,
) -> Result<Option<SubmissionResult>, ActionError> {
    let data: RegistrationForm = match validated(registry::user_create(), form) {
        Ok(data) => data,
        Err(result) => return Ok(Some(result)),
    };

    if let Err(violation) = rules::check_password_confirmation(&data) {
        warn!(rule = "password_confirmation", "Registration rejected");
        return Ok(Some(violation.into()));
    }

    let existing = store.find_user_by_email(&data.email).await?;
    if let Err(violation) = rules::check_email_available(existing.as_ref()) {
        warn!(rule = "email_available", "Registration rejected");
        return Ok(Some(violation.into()));
    }

    let password_hash = hasher.hash(&data.password)?;
    let user = NewUser {
        name: data.name,
        email: data.email,
        password_hash,
    };

    if let Err(failure) = store.insert_user(user).await {
        return Ok(Some(failure.into()));
    }

    info!("User registered");
    signals.revalidate(views::LOGIN);
    signals.navigate(views::LOGIN);
    Ok(None)
}
