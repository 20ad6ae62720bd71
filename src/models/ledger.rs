//! In-memory ledger
//!
//! Holds the accounts (insertion ordered, unique by name) and transactions
//! (unique by id) of one household. Persistence lives behind
//! `storage::LedgerRepository`.

use std::collections::HashMap;

use tracing::warn;

use super::account::Account;
use super::ids::TransactionId;
use super::month::YearMonth;
use super::transaction::Transaction;
use crate::error::{TrackerError, TrackerResult};

/// Accounts and transactions for one household
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
    /// Index: account name -> position in `accounts`
    account_index: HashMap<String, usize>,
    transactions: HashMap<TransactionId, Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // Accounts

    /// Add an account unless one with the same name exists (first write wins)
    ///
    /// Returns true if the account was inserted. A blank name is rejected,
    /// since it could not be read back from a snapshot.
    pub fn add_account(&mut self, account: Account) -> TrackerResult<bool> {
        account
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        if self.account_index.contains_key(&account.name) {
            return Ok(false);
        }
        self.account_index
            .insert(account.name.clone(), self.accounts.len());
        self.accounts.push(account);
        Ok(true)
    }

    /// Get the named account, creating it with the default type if absent
    pub fn ensure_account(&mut self, name: &str) -> TrackerResult<&Account> {
        let idx = match self.account_index.get(name) {
            Some(&idx) => idx,
            None => {
                self.add_account(Account::new(name))?;
                self.accounts.len() - 1
            }
        };
        Ok(&self.accounts[idx])
    }

    pub fn get_account(&self, name: &str) -> Option<&Account> {
        self.account_index.get(name).map(|&idx| &self.accounts[idx])
    }

    /// All accounts, in insertion order
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // Transactions

    /// Insert a transaction, replacing any existing one with the same id
    ///
    /// A transaction that names an unknown account is still inserted; the
    /// account is created with the default type and a warning is logged.
    /// A blank account name is a validation error and nothing is inserted.
    pub fn add_transaction(&mut self, transaction: Transaction) -> TrackerResult<()> {
        if !self.account_index.contains_key(transaction.account()) {
            self.add_account(Account::new(transaction.account()))?;
            warn!(
                transaction = %transaction.id(),
                account = transaction.account(),
                "transaction references unknown account; created it"
            );
        }
        self.transactions
            .insert(transaction.id().clone(), transaction);
        Ok(())
    }

    pub fn get_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    pub fn contains_transaction(&self, id: &TransactionId) -> bool {
        self.transactions.contains_key(id)
    }

    /// Transactions in the given `YYYY-MM` month, sorted by (date, id)
    ///
    /// `None` or an empty string lists every transaction.
    pub fn list_transactions(&self, month: Option<&str>) -> TrackerResult<Vec<Transaction>> {
        let filter = match month.map(str::trim) {
            None | Some("") => None,
            Some(m) => Some(
                YearMonth::parse(m).map_err(|e| TrackerError::Validation(e.to_string()))?,
            ),
        };

        let mut transactions: Vec<_> = self
            .transactions
            .values()
            .filter(|t| filter.map_or(true, |m| m.contains(t.date())))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| a.date().cmp(&b.date()).then_with(|| a.id().cmp(b.id())));
        Ok(transactions)
    }

    /// Every transaction, in no particular order
    pub fn all_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// True when the ledger holds neither accounts nor transactions
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: &str, date: NaiveDate, cents: i64) -> Transaction {
        Transaction::expense(id, date, "Wallet", "Food", Money::from_cents(cents), "", "Shop")
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_account(Account::new("Wallet")).unwrap();
        ledger.add_transaction(expense("b", date(2024, 3, 10), 100)).unwrap();
        ledger.add_transaction(expense("a", date(2024, 3, 10), 200)).unwrap();
        ledger.add_transaction(expense("c", date(2024, 3, 1), 300)).unwrap();
        ledger.add_transaction(expense("d", date(2024, 4, 2), 400)).unwrap();
        ledger.add_transaction(expense("e", date(2023, 3, 15), 500)).unwrap();
        ledger
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn test_add_account_first_write_wins() {
        let mut ledger = Ledger::new();
        assert!(ledger.add_account(Account::with_type("Wallet", "CASH")).unwrap());
        assert!(!ledger.add_account(Account::with_type("Wallet", "BANK")).unwrap());

        assert_eq!(ledger.account_count(), 1);
        assert_eq!(ledger.get_account("Wallet").unwrap().account_type, "CASH");
    }

    #[test]
    fn test_list_accounts_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add_account(Account::new("Zeta")).unwrap();
        ledger.add_account(Account::new("Alpha")).unwrap();
        let names: Vec<_> = ledger.list_accounts().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_get_missing_account_is_none() {
        assert!(Ledger::new().get_account("Nope").is_none());
    }

    #[test]
    fn test_add_transaction_overwrites_same_id() {
        let mut ledger = Ledger::new();
        ledger.add_account(Account::new("Wallet")).unwrap();
        ledger.add_transaction(expense("T1", date(2024, 1, 1), 100)).unwrap();
        ledger.add_transaction(expense("T1", date(2024, 1, 2), 999)).unwrap();

        assert_eq!(ledger.transaction_count(), 1);
        let stored = ledger.get_transaction(&"T1".into()).unwrap();
        assert_eq!(stored.amount(), Money::from_cents(999));
        assert_eq!(stored.date(), date(2024, 1, 2));
    }

    #[test]
    fn test_add_transaction_creates_unknown_account() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(expense("T1", date(2024, 1, 1), 100)).unwrap();

        assert!(ledger.contains_transaction(&"T1".into()));
        let account = ledger.get_account("Wallet").unwrap();
        assert_eq!(account.account_type, "CASH");
    }

    #[test]
    fn test_ensure_account_keeps_existing() {
        let mut ledger = Ledger::new();
        ledger.add_account(Account::with_type("Card", "CREDIT")).unwrap();
        assert_eq!(ledger.ensure_account("Card").unwrap().account_type, "CREDIT");
        assert_eq!(ledger.ensure_account("New").unwrap().account_type, "CASH");
        assert_eq!(ledger.account_count(), 2);
    }

    #[test]
    fn test_blank_account_names_are_rejected() {
        let mut ledger = Ledger::new();

        assert!(ledger.add_account(Account::new("  ")).unwrap_err().is_validation());
        assert!(ledger.ensure_account("").unwrap_err().is_validation());

        let orphan = Transaction::expense(
            "T1",
            date(2024, 1, 1),
            "",
            "Food",
            Money::from_cents(5),
            "",
            "Shop",
        );
        assert!(ledger.add_transaction(orphan).unwrap_err().is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_list_transactions_by_month_sorted() {
        let ledger = sample_ledger();
        let march = ledger.list_transactions(Some("2024-03")).unwrap();
        assert_eq!(ids(&march), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_list_transactions_no_match_is_empty() {
        let ledger = sample_ledger();
        assert!(ledger.list_transactions(Some("2024-12")).unwrap().is_empty());
    }

    #[test]
    fn test_list_transactions_all() {
        let ledger = sample_ledger();
        let all = ledger.list_transactions(None).unwrap();
        assert_eq!(ids(&all), vec!["e", "c", "a", "b", "d"]);
        assert_eq!(ids(&ledger.list_transactions(Some("")).unwrap()), ids(&all));
    }

    #[test]
    fn test_list_transactions_rejects_bad_month() {
        let ledger = sample_ledger();
        for bad in ["2024-13", "2024", "abc"] {
            let err = ledger.list_transactions(Some(bad)).unwrap_err();
            assert!(err.is_validation(), "{} should be a validation error", bad);
        }
    }

    #[test]
    fn test_is_empty() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());
        ledger.add_account(Account::new("Wallet")).unwrap();
        assert!(!ledger.is_empty());
    }
}
