//! # Credential Hashing
//!
//! One-way salted password hashing with Argon2id.
//!
//! ```text
//! hash("hunter22")  →  "$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>"
//!                                          ▲
//!                                          └── cost (iterations)
//! ```
//!
//! Verification reads the parameters back out of the PHC string, so hashes
//! created under an older cost keep verifying after the cost changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::HashError;

/// Hashing boundary.
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password with a fresh salt.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Returns whether `plaintext` matches `hash`.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;
}

/// Argon2id hasher with a configurable iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Hasher {
    pub cost: u32,
}

impl Argon2Hasher {
    pub fn new(cost: u32) -> Self {
        Argon2Hasher { cost }
    }

    fn argon2(&self) -> Result<Argon2<'static>, HashError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            self.cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| HashError::InvalidCost(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Argon2Hasher::new(Params::DEFAULT_T_COST)
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()?
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HashError::Hash(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::Verify(e.to_string())),
        }
    }
}
