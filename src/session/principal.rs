//! Session principal
//!
//! The identity the session layer attaches to a request after login.

use serde::{Deserialize, Serialize};

use crate::auth::results::UserRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }
}

impl From<&UserRecord> for Principal {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            roles: record.roles.clone(),
        }
    }
}
