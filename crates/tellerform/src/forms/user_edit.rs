// File: src/forms/user_edit.rs
// Purpose: Profile edit form for an existing account

use super::BankForm;
use crate::store::UserStore;
use crate::types::AccountStatus;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tellerform_validation::{
    account_status_choice, email_address, is_blank, max_chars, required,
};

pub const EMAIL_IN_USE: &str =
    "This email is already in use. Please use a different email address.";

/// Profile fields an account holder or administrator may change
///
/// Location codes are hidden inputs filled by the address picker; only the
/// display names are length-checked.
#[derive(Debug, Clone, Default, Deserialize, Serialize, garde::Validate)]
#[serde(default)]
pub struct UserEditForm {
    #[garde(custom(required), custom(email_address), custom(max_chars(120)))]
    pub email: String,

    #[garde(custom(max_chars(50)))]
    pub firstname: String,

    #[garde(custom(max_chars(50)))]
    pub lastname: String,

    #[garde(custom(max_chars(100)))]
    pub address_line: String,

    #[garde(custom(max_chars(20)))]
    pub postal_code: String,

    #[garde(skip)]
    pub region_code: String,
    #[garde(skip)]
    pub province_code: String,
    #[garde(skip)]
    pub city_code: String,
    #[garde(skip)]
    pub barangay_code: String,

    #[garde(custom(max_chars(100)))]
    pub region_name: String,
    #[garde(custom(max_chars(100)))]
    pub province_name: String,
    #[garde(custom(max_chars(100)))]
    pub city_name: String,
    #[garde(custom(max_chars(100)))]
    pub barangay_name: String,

    #[garde(custom(max_chars(20)))]
    pub phone: String,

    #[garde(custom(required), custom(account_status_choice))]
    pub status: String,

    /// Email on record before the edit; never read from the request
    #[serde(skip)]
    #[garde(skip)]
    pub original_email: String,
}

impl UserEditForm {
    /// Attach the email currently stored for the edited user
    pub fn with_original_email(mut self, email: impl Into<String>) -> Self {
        self.original_email = email.into();
        self
    }
}

/// Cleaned profile changes; blank optional fields become `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub address_line: Option<String>,
    pub postal_code: Option<String>,
    pub region_code: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub barangay_code: Option<String>,
    pub region_name: Option<String>,
    pub province_name: Option<String>,
    pub city_name: Option<String>,
    pub barangay_name: Option<String>,
    pub phone: Option<String>,
    pub status: AccountStatus,
}

fn optional(value: &str) -> Option<String> {
    (!is_blank(value)).then(|| value.to_string())
}

#[async_trait]
impl BankForm for UserEditForm {
    const NAME: &'static str = "user_edit";
    type Output = ProfileUpdate;

    async fn finish(
        &self,
        store: &dyn UserStore,
        mut errors: FieldErrors,
    ) -> Result<Validation<ProfileUpdate>> {
        if !errors.has_field("email")
            && self.email != self.original_email
            && store.find_by_email(&self.email).await?.is_some()
        {
            errors.add("email", EMAIL_IN_USE);
        }

        // status already passed the choice rule when errors are empty
        let status = match self.status.parse::<AccountStatus>() {
            Ok(status) => status,
            Err(()) => return Ok(Validation::Invalid(errors)),
        };

        Ok(Validation::conclude(errors, || ProfileUpdate {
            email: self.email.clone(),
            firstname: optional(&self.firstname),
            lastname: optional(&self.lastname),
            address_line: optional(&self.address_line),
            postal_code: optional(&self.postal_code),
            region_code: optional(&self.region_code),
            province_code: optional(&self.province_code),
            city_code: optional(&self.city_code),
            barangay_code: optional(&self.barangay_code),
            region_name: optional(&self.region_name),
            province_name: optional(&self.province_name),
            city_name: optional(&self.city_name),
            barangay_name: optional(&self.barangay_name),
            phone: optional(&self.phone),
            status,
        }))
    }
}
