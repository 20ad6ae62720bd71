//! Transaction import from external spreadsheets
//!
//! Import is all-or-nothing at the parsing stage: every row is validated
//! before the ledger is touched. Rows whose id is already in the ledger are
//! skipped, which makes re-importing the same file a no-op.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Ledger, Transaction};

use super::file_io::{read_csv_table, CsvTable};
use super::rows::transaction_from_row;

/// Columns every import file must have
pub const REQUIRED_IMPORT_COLUMNS: [&str; 7] =
    ["id", "date", "account", "category", "type", "amount", "notes"];

/// Counterparty columns; at least one must be present
pub const COUNTERPARTY_COLUMNS: [&str; 3] = ["payor", "payee", "party"];

/// Check that a table has the columns an import needs
pub fn validate_import_columns(table: &CsvTable) -> TrackerResult<()> {
    let missing: Vec<&str> = REQUIRED_IMPORT_COLUMNS
        .iter()
        .copied()
        .filter(|c| !table.has_column(c))
        .collect();

    if !missing.is_empty() {
        return Err(TrackerError::Validation(format!(
            "Missing required columns: {}. A 'party' or 'payor'/'payee' column is also expected.",
            missing.join(", ")
        )));
    }

    if !COUNTERPARTY_COLUMNS.iter().any(|c| table.has_column(c)) {
        return Err(TrackerError::Validation(
            "Missing counterparty column: expected 'party' or 'payor'/'payee'".into(),
        ));
    }

    Ok(())
}

/// Read and validate every transaction in an import file
pub fn read_import_file<P: AsRef<Path>>(path: P) -> TrackerResult<Vec<Transaction>> {
    let path = path.as_ref();
    let table = read_csv_table(path)
        .map_err(|e| TrackerError::Import(format!("{}: {}", path.display(), e)))?;
    validate_import_columns(&table)?;

    table.rows.iter().map(transaction_from_row).collect()
}

/// Add transactions whose id is not yet in the ledger
///
/// Accounts the transactions name are created when missing. Returns the
/// number of transactions added.
pub fn merge_transactions(
    ledger: &mut Ledger,
    transactions: Vec<Transaction>,
) -> TrackerResult<usize> {
    let mut added = 0;
    for txn in transactions {
        ledger.ensure_account(txn.account())?;
        if ledger.contains_transaction(txn.id()) {
            debug!(transaction = %txn.id(), "skipping already imported transaction");
            continue;
        }
        ledger.add_transaction(txn)?;
        added += 1;
    }
    Ok(added)
}

/// Import a file into a ledger, returning the number of rows added
pub fn import_into<P: AsRef<Path>>(path: P, ledger: &mut Ledger) -> TrackerResult<usize> {
    let path = path.as_ref();
    let transactions = read_import_file(path)?;
    let total = transactions.len();
    let added = merge_transactions(ledger, transactions)?;
    info!(
        file = %path.display(),
        added,
        skipped = total - added,
        "imported transactions"
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "id,date,account,category,type,amount,notes,payor,payee\n";

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_import_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bank.csv",
            &format!(
                "{}T1,2024-01-05,Bank,Salary,INCOME,2500,,Employer,\n\
                 T2,2024-01-06,Card,Food,EXPENSE,12.50,lunch,,Cafe\n",
                HEADER
            ),
        );

        let mut ledger = Ledger::new();
        assert_eq!(import_into(&path, &mut ledger).unwrap(), 2);
        assert_eq!(import_into(&path, &mut ledger).unwrap(), 0);

        assert_eq!(ledger.transaction_count(), 2);
        assert!(ledger.get_account("Bank").is_some());
        assert!(ledger.get_account("Card").is_some());
        let lunch = ledger.get_transaction(&"T2".into()).unwrap();
        assert_eq!(lunch.amount(), Money::from_cents(1250));
        assert_eq!(lunch.payee(), Some("Cafe"));
    }

    #[test]
    fn test_missing_required_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bad.csv",
            "id,date,account,type,amount,notes,payee\nT1,2024-01-05,Bank,EXPENSE,1,,Shop\n",
        );

        let err = import_into(&path, &mut Ledger::new()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_missing_counterparty_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bad.csv",
            "id,date,account,category,type,amount,notes\nT1,2024-01-05,Bank,Misc,EXPENSE,1,\n",
        );

        let err = import_into(&path, &mut Ledger::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_row_aborts_before_mutation() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bad.csv",
            &format!(
                "{}T1,2024-01-05,Bank,Salary,INCOME,10,,Boss,\n\
                 T2,not-a-date,Bank,Food,EXPENSE,1,,,Shop\n",
                HEADER
            ),
        );

        let mut ledger = Ledger::new();
        let err = import_into(&path, &mut ledger).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_blank_account_aborts_import() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bank.csv",
            &format!(
                "{}T1,2024-01-05,Bank,Salary,INCOME,10,,Boss,\n\
                 T2,2024-01-06,,Food,EXPENSE,5,,,Shop\n",
                HEADER
            ),
        );

        let mut ledger = Ledger::new();
        let err = import_into(&path, &mut ledger).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("missing account name"));
        assert!(ledger.is_empty());
        assert_eq!(ledger.account_count(), 0);
    }

    #[test]
    fn test_existing_ids_are_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bank.csv",
            &format!("{}T1,2024-01-05,Bank,Salary,INCOME,99,,Other,\n", HEADER),
        );

        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::income(
            "T1",
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Bank",
            "Salary",
            Money::from_cents(100),
            "",
            "Boss",
        ))
        .unwrap();

        assert_eq!(import_into(&path, &mut ledger).unwrap(), 0);
        let kept = ledger.get_transaction(&"T1".into()).unwrap();
        assert_eq!(kept.payor(), Some("Boss"));
    }

    #[test]
    fn test_missing_file_is_import_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = import_into(temp_dir.path().join("nope.csv"), &mut Ledger::new()).unwrap_err();
        assert!(matches!(err, TrackerError::Import(_)));
    }
}
