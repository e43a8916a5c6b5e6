//! # Dashboard Error Types
//!
//! Errors that escape an orchestrator. Everything the user can correct
//! travels as a `SubmissionResult` instead.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Failure Routing                                      │
//! │                                                                         │
//! │  Field constraint failed ───────────► SubmissionResult { errors, msg } │
//! │  Business rule failed ──────────────► SubmissionResult { errors, msg } │
//! │  Mutation failed (DbError) ─────────► SubmissionResult { msg }         │
//! │  Invalid credentials ───────────────► "Invalid credentials."           │
//! │                                                                         │
//! │  Email lookup failed ───────────────► ActionError::Store    (fatal)    │
//! │  Hashing failed ────────────────────► ActionError::Hashing  (fatal)    │
//! │  Any other auth failure ────────────► ActionError::Auth     (fatal)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tally_db::DbError;
use thiserror::Error;

/// Password hashing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The configured cost is not accepted by Argon2.
    #[error("Invalid hash cost: {0}")]
    InvalidCost(String),

    /// Hashing itself failed.
    #[error("Failed to hash password: {0}")]
    Hash(String),

    /// The stored hash is not a PHC string.
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    /// Verification failed for a reason other than a mismatch.
    #[error("Failed to verify password: {0}")]
    Verify(String),
}

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No such user, wrong password, or a malformed login form.
    /// The only kind recovered into a user-facing message.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential lookup failed: {0}")]
    Store(#[from] DbError),

    #[error(transparent)]
    Hashing(#[from] HashError),
}

/// Fatal, unrecovered submission failures.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The email lookup during registration failed.
    #[error("Store lookup failed: {0}")]
    Store(#[from] DbError),

    #[error(transparent)]
    Hashing(#[from] HashError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),
}
