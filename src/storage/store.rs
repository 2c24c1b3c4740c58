//! User store interface
//!
//! Mirrors a `users` table with `username`, `password` (hex digest) and
//! `roles` (comma-joined) columns.

use async_trait::async_trait;

use crate::error::StoreError;

/// One row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub password: String,
    pub roles: String,
}

impl UserRow {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        roles: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles: roles.into(),
        }
    }
}

/// Query collaborator backing the credential flows.
///
/// Timeouts and cancellation are the implementation's concern; errors are
/// propagated to the caller without retry.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows whose username equals `username`.
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRow>, StoreError>;

    /// Sets the password column for `username`, returning the rows affected.
    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<u64, StoreError>;
}
