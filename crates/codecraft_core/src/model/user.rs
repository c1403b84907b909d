//! Identity records: registry accounts and the active-session projection.
//!
//! # Responsibility
//! - Define the mock credential registry entry with a salted digest.
//! - Define the reduced session projection persisted under `currentUser`.
//!
//! # Invariants
//! - `email` is the unique login key within a registry.
//! - Plaintext passwords are never stored; only `salt` + SHA-256 digest.
//!   This registry is a demo fixture, not a credential service.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One entry in the mock credential registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    salt: String,
    password_digest: String,
}

impl UserAccount {
    /// Creates an account, digesting `password` with the provided salt.
    pub fn with_password(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
        salt: impl Into<String>,
    ) -> Self {
        let salt = salt.into();
        let password_digest = digest_password(&salt, password);
        Self {
            id,
            name: name.into(),
            email: email.into(),
            salt,
            password_digest,
        }
    }

    /// Checks a login attempt against the stored salted digest.
    pub fn verify_password(&self, password: &str) -> bool {
        digest_password(&self.salt, password) == self.password_digest
    }

    /// Reduced projection persisted as the active session.
    pub fn session_projection(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Active-session identity stored under the `currentUser` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: String,
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
