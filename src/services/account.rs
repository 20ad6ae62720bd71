//! Account service
//!
//! Accounts are identified by name. Creating an account that already exists
//! keeps the stored one (first write wins).

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Account;
use crate::storage::LedgerRepository;

/// Service for account management
pub struct AccountService<'a> {
    repo: &'a dyn LedgerRepository,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(repo: &'a dyn LedgerRepository) -> Self {
        Self { repo }
    }

    /// Create an account, returning the account as stored
    ///
    /// A blank type falls back to the default account type. If the name is
    /// already taken the existing account is returned unchanged.
    pub fn create(&self, name: &str, account_type: &str) -> TrackerResult<Account> {
        let account = if account_type.trim().is_empty() {
            Account::new(name.trim())
        } else {
            Account::with_type(name.trim(), account_type.trim())
        };
        account
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let mut stored = None;
        self.repo.update(&mut |ledger| {
            if ledger.add_account(account.clone())? {
                info!(
                    account = %account.name,
                    account_type = %account.account_type,
                    "created account"
                );
            } else {
                info!(account = %account.name, "account already exists");
            }
            stored = ledger.get_account(&account.name).cloned();
            Ok(())
        })?;

        stored.ok_or_else(|| TrackerError::account_not_found(account.name.clone()))
    }

    /// All accounts, in creation order
    pub fn list(&self) -> TrackerResult<Vec<Account>> {
        Ok(self.repo.load()?.list_accounts().to_vec())
    }

    /// Get an account by name
    pub fn get(&self, name: &str) -> TrackerResult<Option<Account>> {
        Ok(self.repo.load()?.get_account(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLedgerRepository;

    #[test]
    fn test_create_and_list() {
        let repo = MemoryLedgerRepository::new();
        let service = AccountService::new(&repo);

        service.create("Chequing", "BANK").unwrap();
        service.create("Wallet", "").unwrap();

        let accounts = service.list().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name, "Chequing");
        assert_eq!(accounts[1].account_type, "CASH");
    }

    #[test]
    fn test_create_existing_keeps_first() {
        let repo = MemoryLedgerRepository::new();
        let service = AccountService::new(&repo);

        service.create("Card", "CREDIT").unwrap();
        let again = service.create("Card", "BANK").unwrap();

        assert_eq!(again.account_type, "CREDIT");
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let repo = MemoryLedgerRepository::new();
        let err = AccountService::new(&repo).create("  ", "BANK").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_get() {
        let repo = MemoryLedgerRepository::new();
        let service = AccountService::new(&repo);
        service.create("Savings", "BANK").unwrap();

        assert!(service.get("Savings").unwrap().is_some());
        assert!(service.get("savings").unwrap().is_none());
    }
}
