// File: src/forms/login.rs
// Purpose: Login form

use super::BankForm;
use crate::store::UserStore;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tellerform_validation::{max_chars, required};

#[derive(Clone, Default, Deserialize, garde::Validate)]
#[serde(default)]
pub struct LoginForm {
    #[garde(custom(required), custom(max_chars(30)))]
    pub username: String,

    #[garde(custom(required), custom(max_chars(128)))]
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Credentials ready to be checked against the stored hash
#[derive(Clone, Serialize)]
pub struct LoginAttempt {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[async_trait]
impl BankForm for LoginForm {
    const NAME: &'static str = "login";
    type Output = LoginAttempt;

    async fn finish(
        &self,
        _store: &dyn UserStore,
        errors: FieldErrors,
    ) -> Result<Validation<LoginAttempt>> {
        Ok(Validation::conclude(errors, || LoginAttempt {
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }
}
