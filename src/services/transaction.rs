//! Transaction service
//!
//! Records income and expenses against the stored ledger and answers the
//! read queries the CLI needs.

use std::path::Path;

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    AmountInput, DateInput, IdGenerator, Transaction, TransactionDraft, TransactionId,
    TransactionType, UuidIdGenerator,
};
use crate::storage::LedgerRepository;

/// Service for recording and querying transactions
pub struct TransactionService<'a> {
    repo: &'a dyn LedgerRepository,
    ids: Box<dyn IdGenerator + 'a>,
}

/// Input for recording a new transaction
///
/// `party` is the payor for income and the payee for an expense.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    pub date: DateInput,
    pub account: String,
    pub category: String,
    pub amount: AmountInput,
    pub party: String,
    pub notes: String,
}

impl RecordTransactionInput {
    pub fn new(
        date: impl Into<DateInput>,
        account: impl Into<String>,
        amount: impl Into<AmountInput>,
        party: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            account: account.into(),
            category: String::new(),
            amount: amount.into(),
            party: party.into(),
            notes: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl<'a> TransactionService<'a> {
    /// Create a transaction service generating UUID ids
    pub fn new(repo: &'a dyn LedgerRepository) -> Self {
        Self {
            repo,
            ids: Box::new(UuidIdGenerator),
        }
    }

    /// Use a different id source
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'a) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Record an income transaction
    pub fn record_income(&self, input: RecordTransactionInput) -> TrackerResult<TransactionId> {
        self.record(TransactionType::Income.as_str(), input)
    }

    /// Record an expense transaction
    pub fn record_expense(&self, input: RecordTransactionInput) -> TrackerResult<TransactionId> {
        self.record(TransactionType::Expense.as_str(), input)
    }

    /// Record a transaction of the given kind ("INCOME" or "EXPENSE")
    ///
    /// The account is created with the default type when it does not exist.
    /// The ledger is saved before returning the new id.
    pub fn record(
        &self,
        kind: &str,
        input: RecordTransactionInput,
    ) -> TrackerResult<TransactionId> {
        let account = input.account.trim();
        if account.is_empty() {
            return Err(TrackerError::validation("Account name cannot be empty"));
        }

        let id = self.ids.next_id();
        let mut draft = TransactionDraft::new(kind, id.clone(), input.date, account, input.amount)
            .with_category(input.category)
            .with_notes(input.notes);
        draft = match TransactionType::parse(kind) {
            Some(TransactionType::Income) => draft.with_payor(input.party),
            Some(TransactionType::Expense) => draft.with_payee(input.party),
            // Transaction::create reports the unknown kind
            None => draft,
        };
        let txn = Transaction::create(draft)?;

        let mut pending = Some(txn);
        self.repo.update(&mut |ledger| {
            if let Some(txn) = pending.take() {
                ledger.ensure_account(txn.account())?;
                ledger.add_transaction(txn)?;
            }
            Ok(())
        })?;

        info!(transaction = %id, kind, account, "recorded transaction");
        Ok(id)
    }

    /// Get a transaction by id
    pub fn get(&self, id: &TransactionId) -> TrackerResult<Option<Transaction>> {
        Ok(self.repo.load()?.get_transaction(id).cloned())
    }

    /// List transactions, optionally restricted to a `YYYY-MM` month
    pub fn list(&self, month: Option<&str>) -> TrackerResult<Vec<Transaction>> {
        self.repo.load()?.list_transactions(month)
    }

    /// Import transactions from a CSV file, returning how many were added
    pub fn import_file(&self, path: &Path) -> TrackerResult<usize> {
        let mut added = 0;
        self.repo.update(&mut |ledger| {
            added = self.repo.import_transactions(path, ledger)?;
            Ok(())
        })?;
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SequentialIdGenerator};
    use crate::storage::MemoryLedgerRepository;
    use chrono::NaiveDate;

    fn service(repo: &MemoryLedgerRepository) -> TransactionService<'_> {
        TransactionService::new(repo).with_id_generator(SequentialIdGenerator::new("t"))
    }

    #[test]
    fn test_record_income_creates_account() {
        let repo = MemoryLedgerRepository::new();
        let service = service(&repo);

        let id = service
            .record_income(
                RecordTransactionInput::new("2024-05-03", "Bank", 100.0, "Employer")
                    .with_category("Salary"),
            )
            .unwrap();

        assert_eq!(id.as_str(), "t-0001");
        let ledger = repo.load().unwrap();
        assert_eq!(ledger.get_account("Bank").unwrap().account_type, "CASH");

        let txn = service.get(&id).unwrap().unwrap();
        assert_eq!(txn.payor(), Some("Employer"));
        assert_eq!(txn.amount(), Money::from_cents(10000));
        assert_eq!(txn.date(), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn test_record_expense_clamps_negative_amount() {
        let repo = MemoryLedgerRepository::new();
        let service = service(&repo);

        let id = service
            .record_expense(RecordTransactionInput::new("2024-05-04", "Bank", "-12.50", "Shop"))
            .unwrap();

        let txn = service.get(&id).unwrap().unwrap();
        assert!(txn.amount().is_zero());
        assert_eq!(txn.payee(), Some("Shop"));
    }

    #[test]
    fn test_record_rejects_unknown_kind() {
        let repo = MemoryLedgerRepository::new();
        let err = service(&repo)
            .record("TRANSFER", RecordTransactionInput::new("2024-05-04", "Bank", 1.0, "x"))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_record_rejects_empty_account() {
        let repo = MemoryLedgerRepository::new();
        let err = service(&repo)
            .record_income(RecordTransactionInput::new("2024-05-04", "  ", 1.0, "Boss"))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repo.load().unwrap().account_count(), 0);
    }

    #[test]
    fn test_record_rejects_bad_date() {
        let repo = MemoryLedgerRepository::new();
        let err = service(&repo)
            .record_income(RecordTransactionInput::new("05/03/2024", "Bank", 1.0, "Boss"))
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_list_by_month() {
        let repo = MemoryLedgerRepository::new();
        let service = service(&repo);

        service
            .record_income(RecordTransactionInput::new("2024-05-03", "Bank", 100.0, "Boss"))
            .unwrap();
        service
            .record_expense(RecordTransactionInput::new("2024-06-01", "Bank", 5.0, "Shop"))
            .unwrap();

        assert_eq!(service.list(None).unwrap().len(), 2);
        assert_eq!(service.list(Some("2024-05")).unwrap().len(), 1);
        assert!(service.list(Some("2024-07")).unwrap().is_empty());
        assert!(service.list(Some("May 2024")).unwrap_err().is_validation());
    }
}
