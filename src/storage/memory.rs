//! In-memory user store
//!
//! Rows are kept in insertion order. Usernames are not forced unique, so
//! ambiguous lookups can be reproduced.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{UserRow, UserStore};
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    rows: RwLock<Vec<UserRow>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<UserRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn insert(&self, row: UserRow) {
        self.rows.write().await.push(row);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRow>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.username == username)
            .cloned()
            .collect())
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        let mut updated = 0;
        for row in rows.iter_mut().filter(|row| row.username == username) {
            row.password = password_hash.to_string();
            updated += 1;
        }
        Ok(updated)
    }
}
