//! Sign-in.

use tracing::{info, warn};

use tally_core::registry::messages;
use tally_core::validation::FormInput;

use crate::error::{ActionError, AuthError};
use crate::ports::{views, Authenticator, Signals};

/// Signs a user in.
///
/// ## Returns
/// * `Ok(None)` - Authenticated; navigated to the dashboard
/// * `Ok(Some("Invalid credentials."))` - Rejected credentials
/// * `Err(ActionError::Auth)` - Any other authentication failure
pub async fn authenticate(
    auth: &dyn Authenticator,
    signals: &dyn Signals,
    form: &FormInput,
) -> Result<Option<String>, ActionError> {
    match auth.sign_in(form).await {
        Ok(user) => {
            info!(user_id = %user.id, "User signed in");
            signals.navigate(views::DASHBOARD);
            Ok(None)
        }
        Err(AuthError::InvalidCredentials) => {
            warn!("Sign-in rejected");
            Ok(Some(messages::INVALID_CREDENTIALS.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}
