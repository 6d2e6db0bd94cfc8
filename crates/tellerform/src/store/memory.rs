//! In-memory user store

use crate::database::{NewUser, User};
use crate::store::UserStore;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory user store
///
/// Enforces the same uniqueness as the SQL schema so fixtures behave like
/// the real table.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, assigning the next id
    pub async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            bail!("username already taken: {}", user.username);
        }
        if users.iter().any(|u| u.email == user.email) {
            bail!("email already taken: {}", user.email);
        }
        if users.iter().any(|u| u.account_number == user.account_number) {
            bail!("account number already taken: {}", user.account_number);
        }

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = user.into_user(id);
        users.push(user.clone());
        Ok(user)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    async fn find(&self, matches: impl Fn(&User) -> bool) -> Option<User> {
        self.users.read().await.iter().find(|u| matches(u)).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.find(|u| u.id == id).await)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.find(|u| u.username == username).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.find(|u| u.email == email).await)
    }

    async fn find_by_account_number(&self, account_number: &str) -> Result<Option<User>> {
        Ok(self.find(|u| u.account_number == account_number).await)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
