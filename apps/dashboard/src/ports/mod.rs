//! # Ports
//!
//! The narrow traits an orchestrator calls for everything outside the pure
//! form pipeline. Production implementations live beside each trait; the
//! orchestrators only ever see `&dyn Port`.
//!
//! ```text
//! ports/
//! ├── store.rs    FormStore         persistence boundary
//! ├── hasher.rs   CredentialHasher  one-way password hashing (Argon2id)
//! ├── auth.rs     Authenticator     credential verification
//! └── signals.rs  Signals           revalidate / navigate after success
//! ```

pub mod auth;
pub mod hasher;
pub mod signals;
pub mod store;

pub use auth::{Authenticator, CredentialsProvider};
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use signals::{views, Signals, TracingSignals};
pub use store::{FormStore, PersistenceFailure};
