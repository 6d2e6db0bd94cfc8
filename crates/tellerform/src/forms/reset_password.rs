// File: src/forms/reset_password.rs
// Purpose: Password reset request and the new-password form behind the reset link

use super::{check_confirmation, BankForm};
use crate::store::UserStore;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tellerform_validation::{email_address, max_chars, required, strong_password};

/// Ask for a reset link
///
/// The email is not looked up, so the response never reveals whether an
/// account exists.
#[derive(Debug, Clone, Default, Deserialize, Serialize, garde::Validate)]
#[serde(default)]
pub struct ResetPasswordRequestForm {
    #[garde(custom(required), custom(email_address), custom(max_chars(120)))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetRequest {
    pub email: String,
}

#[async_trait]
impl BankForm for ResetPasswordRequestForm {
    const NAME: &'static str = "reset_password_request";
    type Output = ResetRequest;

    async fn finish(
        &self,
        _store: &dyn UserStore,
        errors: FieldErrors,
    ) -> Result<Validation<ResetRequest>> {
        Ok(Validation::conclude(errors, || ResetRequest {
            email: self.email.clone(),
        }))
    }
}

#[derive(Clone, Default, Deserialize, garde::Validate)]
#[serde(default)]
pub struct ResetPasswordForm {
    #[garde(custom(required), custom(max_chars(128)), custom(strong_password))]
    pub password: String,

    #[garde(custom(required), custom(max_chars(128)))]
    pub password2: String,
}

impl fmt::Debug for ResetPasswordForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordForm").finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize)]
pub struct NewPassword {
    #[serde(skip_serializing)]
    pub password: String,
}

#[async_trait]
impl BankForm for ResetPasswordForm {
    const NAME: &'static str = "reset_password";
    type Output = NewPassword;

    async fn finish(
        &self,
        _store: &dyn UserStore,
        mut errors: FieldErrors,
    ) -> Result<Validation<NewPassword>> {
        check_confirmation(&mut errors, "password2", &self.password2, &self.password);

        Ok(Validation::conclude(errors, || NewPassword {
            password: self.password.clone(),
        }))
    }
}
