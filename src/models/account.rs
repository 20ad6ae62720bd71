//! Account model
//!
//! An account is a named bucket that transactions are recorded against. The
//! name is the account's identity; the type is a free-form tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag given to accounts created without an explicit type
pub const DEFAULT_ACCOUNT_TYPE: &str = "CASH";

/// A named account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account name (unique within a ledger)
    pub name: String,

    /// Free-form account type (e.g., "CASH", "CHEQUING")
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
}

fn default_account_type() -> String {
    DEFAULT_ACCOUNT_TYPE.to_string()
}

impl Account {
    /// Create an account with the default type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: default_account_type(),
        }
    }

    /// Create an account with an explicit type
    pub fn with_type(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults_to_cash() {
        let account = Account::new("Wallet");
        assert_eq!(account.name, "Wallet");
        assert_eq!(account.account_type, "CASH");
    }

    #[test]
    fn test_with_type() {
        let account = Account::with_type("Chequing", "BANK");
        assert_eq!(account.account_type, "BANK");
    }

    #[test]
    fn test_validation() {
        assert!(Account::new("Valid").validate().is_ok());
        assert_eq!(
            Account::new("   ").validate(),
            Err(AccountValidationError::EmptyName)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Account::new("Wallet").to_string(), "Wallet (CASH)");
    }

    #[test]
    fn test_missing_type_deserializes_to_default() {
        let account: Account = serde_json::from_str(r#"{"name":"Wallet"}"#).unwrap();
        assert_eq!(account.account_type, DEFAULT_ACCOUNT_TYPE);
    }
}
