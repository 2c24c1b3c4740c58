//! Password hashing
//!
//! SHA-256 over the process-wide salt followed directly by the password,
//! encoded as lowercase hex. The salt is shared by every user, so identical
//! passwords produce identical hashes.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::config::AuthConfig;

/// Hash `password` with `secret` prefixed (no separator).
pub fn hash_password(secret: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hasher bound to a single secret, shared by the setter and the verifier.
#[derive(Clone)]
pub struct CredentialHasher {
    secret: String,
}

impl CredentialHasher {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.password_salt.clone())
    }

    pub fn hash(&self, password: &str) -> String {
        hash_password(&self.secret, password)
    }
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("secret", &"<redacted>")
            .finish()
    }
}
