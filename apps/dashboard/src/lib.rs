//! # Tally Dashboard Library
//!
//! The form submission pipeline of the invoicing dashboard: orchestrators,
//! the ports they call, and the production adapters behind those ports.
//!
//! ## Module Organization
//! ```text
//! tally_dashboard/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── Fatal error types
//! ├── actions/
//! │   ├── invoice.rs  ◄─── create / update / delete invoice
//! │   ├── user.rs     ◄─── register_user
//! │   └── auth.rs     ◄─── authenticate
//! ├── ports/
//! │   ├── store.rs    ◄─── FormStore
//! │   ├── hasher.rs   ◄─── CredentialHasher + Argon2Hasher
//! │   ├── auth.rs     ◄─── Authenticator + CredentialsProvider
//! │   └── signals.rs  ◄─── Signals + TracingSignals
//! └── persistence.rs  ◄─── FormStore for tally_db::Database
//! ```
//!
//! ## Wiring
//! ```rust,ignore
//! let db = Database::new(config.db_config()).await?;
//! let hasher = Argon2Hasher::new(config.hash_cost);
//!
//! match actions::create_invoice(&db, &TracingSignals, &form).await {
//!     None => { /* navigated to /dashboard/invoices */ }
//!     Some(state) => render(state),
//! }
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod persistence;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use tracing_subscriber::EnvFilter;

pub use config::{AppConfig, ConfigError};
pub use error::{ActionError, AuthError, HashError};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_db=trace` - Trace the database layer only
/// - Default: `info,tally=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
