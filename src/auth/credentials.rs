//! Credential management
//!
//! Sets passwords and verifies login attempts against the user store. Unknown
//! users, ambiguous usernames and wrong passwords all come back as `None` so
//! the caller cannot tell which check failed.

use log::debug;
use std::sync::Arc;

use super::hasher::CredentialHasher;
use super::results::UserRecord;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::middleware::logging;
use crate::storage::UserStore;

#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    pub fn from_config(store: Arc<dyn UserStore>, config: &AuthConfig) -> Self {
        Self::new(store, CredentialHasher::from_config(config))
    }

    /// Stores the hash of `password` for `username`.
    ///
    /// Updating a username that does not exist is not an error.
    pub async fn set_password(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let password_hash = self.hasher.hash(password);
        let rows = self.store.update_password(username, &password_hash).await?;
        logging::log_password_updated(username, rows);
        Ok(())
    }

    /// Verifies `password` for `username`, returning the user on success.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AuthError> {
        let mut rows = self.store.find_by_username(username).await?;

        if let Some(reason) = lookup_failure(rows.len()) {
            debug!("Lookup for {} matched {} rows", username, rows.len());
            logging::log_failed_login(username, reason);
            return Ok(None);
        }

        let Some(row) = rows.pop() else {
            return Ok(None);
        };

        if row.password != self.hasher.hash(password) {
            logging::log_failed_login(username, "password mismatch");
            return Ok(None);
        }

        Ok(Some(UserRecord::from_row(row)))
    }
}

/// Why a username lookup cannot be verified, or `None` for exactly one row.
fn lookup_failure(matched: usize) -> Option<&'static str> {
    match matched {
        0 => Some("user not found"),
        1 => None,
        _ => Some("ambiguous username"),
    }
}
