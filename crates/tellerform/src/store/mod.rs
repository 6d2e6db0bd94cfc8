//! User-record lookups used by the forms' store-backed rules

use crate::database::User;
use anyhow::Result;
use async_trait::async_trait;

pub mod memory;
pub mod sql;

pub use memory::MemoryUserStore;

/// Read-only access to user records, each lookup yielding zero or one user
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_account_number(&self, account_number: &str) -> Result<Option<User>>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}
