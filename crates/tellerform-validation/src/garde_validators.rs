//! Custom garde validators for tellerform fields
//!
//! Each function has the `fn(&str, &()) -> garde::Result` shape garde's
//! `custom(...)` rule expects, so a form can write
//!
//! ```ignore
//! #[derive(garde::Validate)]
//! struct RegistrationForm {
//!     #[garde(custom(required), custom(strong_password))]
//!     password: String,
//! }
//! ```

use crate::{
    email::{is_valid_email, INVALID_EMAIL_MESSAGE},
    numeric::parse_amount,
    password::validate_strong_password,
    string::{is_blank, is_one_of, validate_max_length},
    INVALID_CHOICE_MESSAGE, REQUIRED_MESSAGE,
};

/// Accepted values of a transfer form's `transfer_type` field.
pub const TRANSFER_TYPES: &[&str] = &["username", "account"];

/// Accepted values of a profile form's `status` field.
pub const ACCOUNT_STATUSES: &[&str] = &["active", "deactivated", "pending"];

/// Validator: field must not be blank
pub fn required(value: &str, _ctx: &()) -> garde::Result {
    if is_blank(value) {
        return Err(garde::Error::new(REQUIRED_MESSAGE));
    }
    Ok(())
}

/// Validator: email shape. Blank values are left to [`required`].
pub fn email_address(value: &str, _ctx: &()) -> garde::Result {
    if !is_blank(value) && !is_valid_email(value) {
        return Err(garde::Error::new(INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}

/// Validator: password strength, reporting every broken rule in one message.
/// Blank values are left to [`required`].
pub fn strong_password(value: &str, _ctx: &()) -> garde::Result {
    if is_blank(value) {
        return Ok(());
    }
    validate_strong_password(value).map_err(|message| garde::Error::new(message))
}

/// Validator: required amount of at least 0.01
///
/// Not named `amount`: garde binds each field to a local of the field's
/// name, which would shadow a validator of the same name.
pub fn valid_amount(value: &str, _ctx: &()) -> garde::Result {
    parse_amount(value)
        .map(|_| ())
        .map_err(|err| garde::Error::new(err.message()))
}

/// Validator: transfer mode must be one of [`TRANSFER_TYPES`]
pub fn transfer_type_choice(value: &str, _ctx: &()) -> garde::Result {
    choice(value, TRANSFER_TYPES)
}

/// Validator factory: at most `max` characters.
///
/// Used as `custom(max_chars(30))` so the message matches the other field
/// errors instead of garde's built-in length wording.
pub fn max_chars(max: usize) -> impl Fn(&str, &()) -> garde::Result {
    move |value: &str, _ctx: &()| {
        validate_max_length(value, max).map_err(|message| garde::Error::new(message))
    }
}

/// Validator: account status must be one of [`ACCOUNT_STATUSES`].
/// Blank values are left to [`required`].
pub fn account_status_choice(value: &str, _ctx: &()) -> garde::Result {
    if is_blank(value) {
        return Ok(());
    }
    choice(value, ACCOUNT_STATUSES)
}

fn choice(value: &str, allowed: &[&str]) -> garde::Result {
    if is_one_of(value, allowed) {
        Ok(())
    } else {
        Err(garde::Error::new(INVALID_CHOICE_MESSAGE))
    }
}
