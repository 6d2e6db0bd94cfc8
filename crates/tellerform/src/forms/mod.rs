// File: src/forms/mod.rs
// Purpose: Form schemas and the two-stage validation every form goes through
//
// Stage one is declarative: each form derives `garde::Validate` and tags its
// fields with length limits and the custom rules from tellerform-validation.
// Stage two (`BankForm::finish`) runs cross-field and store-backed rules and
// builds the cleaned output.

use crate::database::User;
use crate::store::UserStore;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use garde::Validate;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

pub mod deposit;
pub mod login;
pub mod registration;
pub mod reset_password;
pub mod transfer;
pub mod user_edit;

pub use deposit::{DepositForm, DepositRequest};
pub use login::{LoginAttempt, LoginForm};
pub use registration::{NewAccount, RegistrationForm};
pub use reset_password::{NewPassword, ResetPasswordForm, ResetPasswordRequestForm, ResetRequest};
pub use transfer::{ConfirmTransferForm, TransferForm, TransferRequest};
pub use user_edit::{ProfileUpdate, UserEditForm};

/// Message for a confirmation field that differs from its original
pub const MISMATCH_MESSAGE: &str = "Field must be equal to password.";

/// A submitted form with declarative rules and a store-backed second stage
#[async_trait]
pub trait BankForm: Validate<Context = ()> + DeserializeOwned + Send + Sync {
    /// Name used in logs
    const NAME: &'static str;

    /// Cleaned value handed back once every rule passes
    type Output: Send;

    /// Run the remaining rules given the declarative `errors`, and build the
    /// output when nothing failed.
    async fn finish(
        &self,
        store: &dyn UserStore,
        errors: FieldErrors,
    ) -> Result<Validation<Self::Output>>;
}

/// Validate a form: declarative rules first, then the form's own stage.
///
/// `Err` means the store failed, never that the input was bad.
pub async fn validate_form<F: BankForm>(
    form: &F,
    store: &dyn UserStore,
) -> Result<Validation<F::Output>> {
    let errors = match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(report) => FieldErrors::from_report(&report),
    };

    form.finish(store, errors).await
}

/// What a response may show about someone else's account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountSummary<'a> {
    pub username: &'a str,
    pub account_number: &'a str,
}

impl<'a> From<&'a User> for AccountSummary<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            username: &user.username,
            account_number: &user.account_number,
        }
    }
}

/// `serialize_with` target for outputs that carry another user's record
fn serialize_account_summary<S: Serializer>(
    user: &User,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    AccountSummary::from(user).serialize(serializer)
}

/// Record a mismatch on `field` unless it already failed
fn check_confirmation(errors: &mut FieldErrors, field: &str, value: &str, original: &str) {
    if !errors.has_field(field) && value != original {
        errors.add(field, MISMATCH_MESSAGE);
    }
}
