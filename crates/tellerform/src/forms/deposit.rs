// File: src/forms/deposit.rs
// Purpose: Deposit into an account identified by number

use super::BankForm;
use crate::database::User;
use crate::store::UserStore;
use crate::types::Amount;
use crate::validation::{FieldErrors, Validation};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tellerform_validation::{max_chars, required, valid_amount};

pub const UNKNOWN_ACCOUNT: &str = "No account with that number";

#[derive(Debug, Clone, Default, Deserialize, Serialize, garde::Validate)]
#[serde(default)]
pub struct DepositForm {
    #[garde(custom(required), custom(max_chars(30)))]
    pub account_number: String,

    #[garde(custom(valid_amount))]
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositRequest {
    /// Serialized as an account summary only
    #[serde(serialize_with = "super::serialize_account_summary")]
    pub account: User,
    pub amount: Amount,
}

#[async_trait]
impl BankForm for DepositForm {
    const NAME: &'static str = "deposit";
    type Output = DepositRequest;

    async fn finish(
        &self,
        store: &dyn UserStore,
        mut errors: FieldErrors,
    ) -> Result<Validation<DepositRequest>> {
        if !errors.is_empty() {
            return Ok(Validation::Invalid(errors));
        }

        let Some(account) = store.find_by_account_number(&self.account_number).await? else {
            errors.set("account_number", UNKNOWN_ACCOUNT);
            return Ok(Validation::Invalid(errors));
        };

        match Amount::parse(&self.amount) {
            Ok(amount) => Ok(Validation::Valid(DepositRequest { account, amount })),
            Err(message) => {
                errors.set("amount", message);
                Ok(Validation::Invalid(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{fixtures, validate_form};
    use pretty_assertions::assert_eq;

    fn form(account_number: &str, amount: &str) -> DepositForm {
        DepositForm {
            account_number: account_number.to_string(),
            amount: amount.to_string(),
        }
    }

    #[tokio::test]
    async fn test_deposit_into_existing_account() {
        let store = fixtures::store().await;
        let request = validate_form(&form("1000-0002", "100.25"), &store)
            .await
            .unwrap()
            .ok()
            .expect("valid deposit");

        assert_eq!(request.account.username, "bob");
        assert_eq!(request.amount.into_inner(), 100.25);
    }

    #[tokio::test]
    async fn test_serialized_account_hides_balance_and_email() {
        let store = fixtures::store().await;
        let request = validate_form(&form("1000-0001", "10"), &store)
            .await
            .unwrap()
            .ok()
            .expect("valid deposit");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["account"],
            serde_json::json!({ "username": "alice", "account_number": "1000-0001" })
        );
    }

    #[tokio::test]
    async fn test_deposit_unknown_account() {
        let store = fixtures::store().await;
        let errors = validate_form(&form("4040-4040", "5"), &store)
            .await
            .unwrap()
            .err()
            .expect("unknown account");

        assert_eq!(errors.fields(), vec!["account_number"]);
        assert_eq!(errors.first("account_number"), Some(UNKNOWN_ACCOUNT));
    }

    #[tokio::test]
    async fn test_deposit_declarative_errors_skip_lookup() {
        let store = fixtures::store().await;
        let errors = validate_form(&form("", "abc"), &store)
            .await
            .unwrap()
            .err()
            .expect("invalid deposit");

        assert_eq!(errors.first("account_number"), Some("This field is required."));
        assert_eq!(
            errors.get("amount"),
            Some(&["This field is required.".to_string()][..])
        );
        assert_eq!(errors.len(), 2);
    }

    #[tokio::test]
    async fn test_deposit_negative_amount() {
        let store = fixtures::store().await;
        let errors = validate_form(&form("1000-0001", "-3"), &store)
            .await
            .unwrap()
            .err()
            .expect("negative deposit");

        assert_eq!(errors.first("amount"), Some("Amount must be greater than 0"));
    }
}
