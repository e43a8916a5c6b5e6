//! # User Repository
//!
//! Registration inserts and the email lookup used by the duplicate check
//! and sign-in.

use sqlx::SqlitePool;
use tracing::debug;

use super::generate_id;
use crate::error::DbResult;
use tally_core::{NewUser, User};

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Looks up a user by exact email.
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - A user owns this email
    /// * `Ok(None)` - The email is free
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        debug!(email = %email, "Looking up user by email");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user with a generated id.
    ///
    /// ## Returns
    /// * `Ok(User)` - The stored row
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn insert(&self, user: &NewUser) -> DbResult<User> {
        let id = generate_id();
        debug!(id = %id, email = %user.email, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
        })
    }

    /// Counts registered users (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
