// File: src/forms/transfer.rs
// Purpose: Funds transfer form and its confirmation step

use super::BankForm;
use crate::database::User;
use crate::store::UserStore;
use crate::types::{Amount, TransferMode};
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tellerform_validation::{
    is_blank, max_chars, transfer_type_choice, valid_amount, INVALID_CHOICE_MESSAGE,
};

#[derive(Debug, Clone, Deserialize, Serialize, garde::Validate)]
#[serde(default)]
pub struct TransferForm {
    /// `username` or `account`
    #[garde(custom(transfer_type_choice))]
    pub transfer_type: String,

    #[garde(custom(max_chars(30)))]
    pub recipient_username: String,

    #[garde(custom(max_chars(30)))]
    pub recipient_account: String,

    #[garde(custom(valid_amount))]
    pub amount: String,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self {
            transfer_type: TransferMode::Username.as_str().to_string(),
            recipient_username: String::new(),
            recipient_account: String::new(),
            amount: String::new(),
        }
    }
}

impl TransferForm {
    fn recipient_value(&self, mode: TransferMode) -> &str {
        match mode {
            TransferMode::Username => &self.recipient_username,
            TransferMode::Account => &self.recipient_account,
        }
    }
}

/// A transfer whose recipient exists
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    /// Serialized as an account summary only
    #[serde(serialize_with = "super::serialize_account_summary")]
    pub recipient: User,
    pub mode: TransferMode,
    pub amount: Amount,
}

impl TransferRequest {
    /// Hidden fields for the confirmation page
    pub fn confirmation(&self) -> ConfirmTransferForm {
        let (recipient_username, recipient_account) = match self.mode {
            TransferMode::Username => (self.recipient.username.clone(), String::new()),
            TransferMode::Account => (String::new(), self.recipient.account_number.clone()),
        };

        ConfirmTransferForm {
            recipient_username,
            recipient_account,
            amount: self.amount.to_string(),
            transfer_type: self.mode.as_str().to_string(),
        }
    }
}

#[async_trait]
impl BankForm for TransferForm {
    const NAME: &'static str = "transfer";
    type Output = TransferRequest;

    async fn finish(
        &self,
        store: &dyn UserStore,
        mut errors: FieldErrors,
    ) -> Result<Validation<TransferRequest>> {
        // Recipient rules only run on an otherwise clean form
        if !errors.is_empty() {
            return Ok(Validation::Invalid(errors));
        }

        let Ok(mode) = self.transfer_type.parse::<TransferMode>() else {
            errors.set("transfer_type", INVALID_CHOICE_MESSAGE);
            return Ok(Validation::Invalid(errors));
        };

        let field = mode.recipient_field();
        let recipient = self.recipient_value(mode);
        if is_blank(recipient) {
            errors.set(field, mode.missing_recipient_message());
            return Ok(Validation::Invalid(errors));
        }

        let found = match mode {
            TransferMode::Username => store.find_by_username(recipient).await?,
            TransferMode::Account => store.find_by_account_number(recipient).await?,
        };
        let Some(recipient) = found else {
            errors.set(field, mode.unknown_recipient_message());
            return Ok(Validation::Invalid(errors));
        };

        match Amount::parse(&self.amount) {
            Ok(amount) => Ok(Validation::Valid(TransferRequest {
                recipient,
                mode,
                amount,
            })),
            Err(message) => {
                errors.set("amount", message);
                Ok(Validation::Invalid(errors))
            }
        }
    }
}

/// Hidden fields echoing a validated transfer back for confirmation
///
/// The values come back from the browser, so a submitted confirmation is
/// validated again as a [`TransferForm`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfirmTransferForm {
    pub recipient_username: String,
    pub recipient_account: String,
    pub amount: String,
    pub transfer_type: String,
}

impl From<ConfirmTransferForm> for TransferForm {
    fn from(confirm: ConfirmTransferForm) -> Self {
        Self {
            transfer_type: confirm.transfer_type,
            recipient_username: confirm.recipient_username,
            recipient_account: confirm.recipient_account,
            amount: confirm.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{fixtures, validate_form};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn form(transfer_type: &str, username: &str, account: &str, amount: &str) -> TransferForm {
        TransferForm {
            transfer_type: transfer_type.to_string(),
            recipient_username: username.to_string(),
            recipient_account: account.to_string(),
            amount: amount.to_string(),
        }
    }

    async fn errors_for(form: TransferForm) -> FieldErrors {
        let store = fixtures::store().await;
        validate_form(&form, &store)
            .await
            .unwrap()
            .err()
            .expect("invalid transfer")
    }

    #[test]
    fn test_default_mode_is_username() {
        assert_eq!(TransferForm::default().transfer_type, "username");
    }

    #[tokio::test]
    async fn test_transfer_by_username() {
        let store = fixtures::store().await;
        let request = validate_form(&form("username", "bob", "", "250"), &store)
            .await
            .unwrap()
            .ok()
            .expect("valid transfer");

        assert_eq!(request.recipient.username, "bob");
        assert_eq!(request.mode, TransferMode::Username);
        assert_eq!(request.amount.into_inner(), 250.0);
    }

    #[tokio::test]
    async fn test_transfer_by_account_ignores_username_field() {
        let store = fixtures::store().await;
        let request = validate_form(&form("account", "nobody", "1000-0001", "0.01"), &store)
            .await
            .unwrap()
            .ok()
            .expect("valid transfer");

        assert_eq!(request.recipient.username, "alice");
        assert_eq!(request.mode, TransferMode::Account);
    }

    #[rstest]
    #[case(form("username", "", "1000-0001", "10"), "recipient_username", "Username is required when transferring by username")]
    #[case(form("account", "bob", "", "10"), "recipient_account", "Account number is required when transferring by account number")]
    #[case(form("username", "mallory", "", "10"), "recipient_username", "No user with that username")]
    #[case(form("account", "", "9999-9999", "10"), "recipient_account", "No account with that number")]
    #[tokio::test]
    async fn test_transfer_recipient_errors(
        #[case] form: TransferForm,
        #[case] field: &str,
        #[case] message: &str,
    ) {
        let errors = errors_for(form).await;
        assert_eq!(errors.get(field), Some(&[message.to_string()][..]));
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn test_transfer_amount_errors_stop_before_recipient_rules() {
        let errors = errors_for(form("username", "", "", "0")).await;

        assert_eq!(errors.fields(), vec!["amount"]);
        assert_eq!(errors.first("amount"), Some("This field is required."));
    }

    #[tokio::test]
    async fn test_transfer_amount_minimum() {
        let errors = errors_for(form("username", "bob", "", "0.001")).await;
        assert_eq!(errors.first("amount"), Some("Amount must be greater than 0"));
    }

    #[tokio::test]
    async fn test_transfer_unknown_mode() {
        let errors = errors_for(form("iban", "bob", "", "10")).await;
        assert_eq!(errors.first("transfer_type"), Some("Not a valid choice."));
    }

    #[tokio::test]
    async fn test_serialized_recipient_is_a_summary() {
        let store = fixtures::store().await;
        let request = validate_form(&form("username", "bob", "", "5"), &store)
            .await
            .unwrap()
            .ok()
            .expect("valid transfer");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["recipient"],
            serde_json::json!({ "username": "bob", "account_number": "1000-0002" })
        );
        assert_eq!(json["mode"], "username");
    }

    #[tokio::test]
    async fn test_confirmation_round_trip() {
        let store = fixtures::store().await;
        let request = validate_form(&form("account", "", "1000-0002", "75.5"), &store)
            .await
            .unwrap()
            .ok()
            .expect("valid transfer");

        let confirm = request.confirmation();
        assert_eq!(
            confirm,
            ConfirmTransferForm {
                recipient_username: String::new(),
                recipient_account: "1000-0002".to_string(),
                amount: "75.5".to_string(),
                transfer_type: "account".to_string(),
            }
        );

        let again = validate_form(&TransferForm::from(confirm), &store)
            .await
            .unwrap()
            .ok()
            .expect("confirmation still valid");
        assert_eq!(again.recipient.id, request.recipient.id);
        assert_eq!(again.amount, request.amount);
    }

    #[tokio::test]
    async fn test_tampered_confirmation_is_rejected() {
        let store = fixtures::store().await;
        let confirm = ConfirmTransferForm {
            recipient_username: "mallory".to_string(),
            recipient_account: String::new(),
            amount: "10".to_string(),
            transfer_type: "username".to_string(),
        };

        let errors = validate_form(&TransferForm::from(confirm), &store)
            .await
            .unwrap()
            .err()
            .expect("tampered confirmation");
        assert_eq!(errors.first("recipient_username"), Some("No user with that username"));
    }
}
