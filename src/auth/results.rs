//! Authentication result types
//!
//! Defines the user record returned by a successful verification.

use std::fmt;

use crate::storage::UserRow;

/// A verified user. `roles` is the stored comma-joined string split apart.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl UserRecord {
    pub fn from_row(row: UserRow) -> Self {
        Self {
            roles: parse_roles(&row.roles),
            username: row.username,
            password_hash: row.password,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}

/// Splits a stored roles string on `,`. Entries are kept verbatim.
pub fn parse_roles(stored: &str) -> Vec<String> {
    stored.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(parse_roles("admin,editor"), vec!["admin", "editor"]);
        assert_eq!(parse_roles("admin"), vec!["admin"]);
    }

    #[test]
    fn test_parse_roles_keeps_whitespace_and_empties() {
        assert_eq!(parse_roles("admin, editor"), vec!["admin", " editor"]);
        assert_eq!(parse_roles(""), vec![""]);
        assert_eq!(parse_roles("admin,"), vec!["admin", ""]);
    }

    #[test]
    fn test_from_row() {
        let record = UserRecord::from_row(UserRow::new("alice", "abc123", "admin,viewer"));
        assert_eq!(record.username, "alice");
        assert_eq!(record.password_hash, "abc123");
        assert_eq!(record.roles, vec!["admin", "viewer"]);
        assert!(record.has_role("viewer"));
        assert!(!record.has_role("editor"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let record = UserRecord::from_row(UserRow::new("alice", "abc123", "admin"));
        assert!(!format!("{:?}", record).contains("abc123"));
    }
}
