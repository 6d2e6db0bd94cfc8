//! SQL-backed user store

use crate::database::{Database, LookupColumn, User};
use crate::store::UserStore;
use anyhow::{Context, Result};
use async_trait::async_trait;

impl Database {
    async fn lookup(&self, column: LookupColumn, value: &str) -> Result<Option<User>> {
        self.find_user_by(column, value)
            .await
            .with_context(|| format!("Failed to look up user by {}", column.as_str()))
    }
}

#[async_trait]
impl UserStore for Database {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user(id)
            .await
            .with_context(|| format!("Failed to load user {}", id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.lookup(LookupColumn::Username, username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.lookup(LookupColumn::Email, email).await
    }

    async fn find_by_account_number(&self, account_number: &str) -> Result<Option<User>> {
        self.lookup(LookupColumn::AccountNumber, account_number).await
    }

    fn name(&self) -> &'static str {
        match self.db_type() {
            crate::database::DatabaseType::PostgreSQL => "postgres",
            crate::database::DatabaseType::SQLite => "sqlite",
        }
    }
}
