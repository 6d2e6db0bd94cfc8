// File: src/types.rs
// Purpose: Typed values produced by a successful form validation

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tellerform_validation::parse_amount;

/// A money amount of at least 0.01
///
/// Only constructed after the submitted text passed the amount rule, so
/// handlers never see a zero, negative, or non-finite value.
#[nutype(
    validate(finite, greater_or_equal = 0.01),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Display,
        Into,
        Serialize,
        Deserialize,
    )
)]
pub struct Amount(f64);

impl Amount {
    /// Parse submitted text, returning the user-facing message on failure
    pub fn parse(raw: &str) -> Result<Self, &'static str> {
        let value = parse_amount(raw).map_err(|rejection| rejection.message())?;
        Amount::try_new(value).map_err(|_| tellerform_validation::BELOW_MINIMUM_MESSAGE)
    }
}

/// How a transfer names its recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    Username,
    Account,
}

impl TransferMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TransferMode::Username => "username",
            TransferMode::Account => "account",
        }
    }

    /// Form field holding the recipient for this mode
    pub fn recipient_field(self) -> &'static str {
        match self {
            TransferMode::Username => "recipient_username",
            TransferMode::Account => "recipient_account",
        }
    }

    pub fn missing_recipient_message(self) -> &'static str {
        match self {
            TransferMode::Username => "Username is required when transferring by username",
            TransferMode::Account => {
                "Account number is required when transferring by account number"
            }
        }
    }

    pub fn unknown_recipient_message(self) -> &'static str {
        match self {
            TransferMode::Username => "No user with that username",
            TransferMode::Account => "No account with that number",
        }
    }
}

impl FromStr for TransferMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(TransferMode::Username),
            "account" => Ok(TransferMode::Account),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state an administrator can set on an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Deactivated,
    Pending,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Deactivated => "deactivated",
            AccountStatus::Pending => "pending",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "deactivated" => Ok(AccountStatus::Deactivated),
            "pending" => Ok(AccountStatus::Pending),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
