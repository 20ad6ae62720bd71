//! CSV snapshot repository
//!
//! Stores the ledger as `accounts.csv` (`name,type`) and `transactions.csv`
//! under the data directory. Transactions are written sorted by date then id.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Ledger, Transaction};

use super::file_io::{read_csv_table, write_csv_atomic};
use super::rows::{
    account_from_row, account_to_row, transaction_from_row, transaction_to_row, ACCOUNT_COLUMNS,
    TRANSACTION_COLUMNS,
};
use super::LedgerRepository;

pub const ACCOUNTS_FILE: &str = "accounts.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

/// Repository persisting the ledger as CSV tables
pub struct CsvLedgerRepository {
    data_dir: PathBuf,
    accounts_path: PathBuf,
    transactions_path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvLedgerRepository {
    /// Create a repository rooted at `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            data_dir: data_dir.to_path_buf(),
            accounts_path: data_dir.join(ACCOUNTS_FILE),
            transactions_path: data_dir.join(TRANSACTIONS_FILE),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_paths(paths: &TrackerPaths) -> Self {
        Self {
            data_dir: paths.data_dir(),
            accounts_path: paths.accounts_file(),
            transactions_path: paths.transactions_file(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn accounts_path(&self) -> &Path {
        &self.accounts_path
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }

    /// Read both tables; errors name the file that failed
    fn read_snapshot(&self) -> TrackerResult<Ledger> {
        let mut ledger = Ledger::new();

        if self.accounts_path.exists() {
            self.read_accounts(&mut ledger)
                .map_err(|e| snapshot_error(&self.accounts_path, e))?;
        }

        if self.transactions_path.exists() {
            self.read_transactions(&mut ledger)
                .map_err(|e| snapshot_error(&self.transactions_path, e))?;
        }

        Ok(ledger)
    }

    fn read_accounts(&self, ledger: &mut Ledger) -> TrackerResult<()> {
        let table = read_csv_table(&self.accounts_path)?;
        for row in &table.rows {
            ledger.add_account(account_from_row(row)?)?;
        }
        Ok(())
    }

    fn read_transactions(&self, ledger: &mut Ledger) -> TrackerResult<()> {
        let table = read_csv_table(&self.transactions_path)?;
        for row in &table.rows {
            let txn = transaction_from_row(row)?;
            ledger.ensure_account(txn.account())?;
            ledger.add_transaction(txn)?;
        }
        Ok(())
    }

    fn write_snapshot(&self, ledger: &Ledger) -> TrackerResult<()> {
        let accounts: Vec<Vec<String>> =
            ledger.list_accounts().iter().map(account_to_row).collect();

        let mut transactions: Vec<&Transaction> = ledger.all_transactions().collect();
        transactions.sort_by(|a, b| a.date().cmp(&b.date()).then_with(|| a.id().cmp(b.id())));
        let transactions: Vec<Vec<String>> =
            transactions.into_iter().map(transaction_to_row).collect();

        write_csv_atomic(&self.accounts_path, &ACCOUNT_COLUMNS, &accounts)?;
        write_csv_atomic(&self.transactions_path, &TRANSACTION_COLUMNS, &transactions)?;

        debug!(
            accounts = accounts.len(),
            transactions = transactions.len(),
            "saved ledger snapshot"
        );
        Ok(())
    }
}

fn snapshot_error(path: &Path, error: TrackerError) -> TrackerError {
    TrackerError::Storage(format!("{}: {}", path.display(), error))
}

impl LedgerRepository for CsvLedgerRepository {
    fn load(&self) -> TrackerResult<Ledger> {
        if !self.accounts_path.exists() && !self.transactions_path.exists() {
            return Ok(Ledger::new());
        }

        match self.read_snapshot() {
            Ok(ledger) => Ok(ledger),
            Err(e) => {
                warn!(
                    data_dir = %self.data_dir.display(),
                    error = %e,
                    "could not load ledger snapshot, starting empty"
                );
                Ok(Ledger::new())
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        self.write_snapshot(ledger)
    }

    fn update(&self, apply: &mut dyn FnMut(&mut Ledger) -> TrackerResult<()>) -> TrackerResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut ledger = self.load()?;
        apply(&mut ledger)?;
        self.write_snapshot(&ledger)
    }
}
