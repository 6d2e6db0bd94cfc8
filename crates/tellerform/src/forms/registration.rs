// File: src/forms/registration.rs
// Purpose: New-account registration form

use super::{check_confirmation, BankForm};
use crate::store::UserStore;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tellerform_validation::{email_address, max_chars, required, strong_password};

pub const USERNAME_TAKEN: &str = "Please use a different username.";
pub const EMAIL_TAKEN: &str = "Please use a different email address.";

#[derive(Clone, Default, Deserialize, garde::Validate)]
#[serde(default)]
pub struct RegistrationForm {
    #[garde(custom(required), custom(max_chars(30)))]
    pub username: String,

    #[garde(custom(required), custom(email_address), custom(max_chars(120)))]
    pub email: String,

    #[garde(custom(required), custom(max_chars(128)), custom(strong_password))]
    pub password: String,

    /// Repeat of `password`
    #[garde(custom(required), custom(max_chars(128)))]
    pub password2: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Account details that passed every registration rule
#[derive(Clone, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[async_trait]
impl BankForm for RegistrationForm {
    const NAME: &'static str = "registration";
    type Output = NewAccount;

    async fn finish(
        &self,
        store: &dyn UserStore,
        mut errors: FieldErrors,
    ) -> Result<Validation<NewAccount>> {
        check_confirmation(&mut errors, "password2", &self.password2, &self.password);

        if !errors.has_field("username")
            && store.find_by_username(&self.username).await?.is_some()
        {
            errors.add("username", USERNAME_TAKEN);
        }

        if !errors.has_field("email") && store.find_by_email(&self.email).await?.is_some() {
            errors.add("email", EMAIL_TAKEN);
        }

        Ok(Validation::conclude(errors, || NewAccount {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{fixtures, validate_form, MISMATCH_MESSAGE};
    use pretty_assertions::assert_eq;

    fn form(username: &str, email: &str, password: &str, password2: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password2: password2.to_string(),
        }
    }

    #[tokio::test]
    async fn test_registration_accepts_new_user() {
        let store = fixtures::store().await;
        let account = validate_form(
            &form("carol", "carol@bank.test", "Secure#Pass1", "Secure#Pass1"),
            &store,
        )
        .await
        .unwrap()
        .ok()
        .expect("valid registration");

        assert_eq!(account.username, "carol");
        assert_eq!(account.email, "carol@bank.test");
    }

    #[tokio::test]
    async fn test_registration_rejects_taken_username_and_email() {
        let store = fixtures::store().await;
        let errors = validate_form(
            &form("alice", "bob@bank.test", "Secure#Pass1", "Secure#Pass1"),
            &store,
        )
        .await
        .unwrap()
        .err()
        .expect("invalid registration");

        assert_eq!(errors.get("username"), Some(&[USERNAME_TAKEN.to_string()][..]));
        assert_eq!(errors.get("email"), Some(&[EMAIL_TAKEN.to_string()][..]));
        assert_eq!(errors.len(), 2);
    }

    #[tokio::test]
    async fn test_registration_itemizes_weak_password() {
        let store = fixtures::store().await;
        let errors = validate_form(&form("carol", "carol@bank.test", "weakpass", "weakpass"), &store)
            .await
            .unwrap()
            .err()
            .expect("invalid registration");

        assert_eq!(
            errors.first("password"),
            Some(
                "Password requirements not met: \
                 • password must contain at least one uppercase letter \
                 • password must contain at least one number \
                 • password must contain at least one special character"
            )
        );
        assert_eq!(errors.fields(), vec!["password"]);
    }

    #[tokio::test]
    async fn test_registration_requires_matching_confirmation() {
        let store = fixtures::store().await;
        let errors = validate_form(
            &form("carol", "carol@bank.test", "Secure#Pass1", "Secure#Pass2"),
            &store,
        )
        .await
        .unwrap()
        .err()
        .expect("invalid registration");

        assert_eq!(errors.first("password2"), Some(MISMATCH_MESSAGE));
    }

    #[tokio::test]
    async fn test_registration_blank_form() {
        let store = fixtures::store().await;
        let errors = validate_form(&RegistrationForm::default(), &store)
            .await
            .unwrap()
            .err()
            .expect("invalid registration");

        for field in ["username", "email", "password", "password2"] {
            assert_eq!(
                errors.get(field),
                Some(&["This field is required.".to_string()][..]),
                "field {field}"
            );
        }
    }

    #[tokio::test]
    async fn test_registration_bad_email_skips_lookup() {
        let store = fixtures::store().await;
        let errors = validate_form(
            &form("carol", "not-an-email", "Secure#Pass1", "Secure#Pass1"),
            &store,
        )
        .await
        .unwrap()
        .err()
        .expect("invalid registration");

        assert_eq!(
            errors.get("email"),
            Some(&["Invalid email address.".to_string()][..])
        );
    }
}
