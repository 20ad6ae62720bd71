//! Mapping between spreadsheet rows and domain values
//!
//! Shared by the snapshot repository and the import path. Reading is lenient
//! about legacy layouts: a single `party` column instead of `payor`/`payee`,
//! and `_amount` instead of `amount`.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, Transaction, TransactionDraft, TransactionType};

use super::file_io::CsvRow;

/// Column order of the transactions sheet
pub const TRANSACTION_COLUMNS: [&str; 9] = [
    "id", "date", "account", "category", "type", "amount", "notes", "payor", "payee",
];

/// Column order of the accounts sheet
pub const ACCOUNT_COLUMNS: [&str; 2] = ["name", "type"];

/// Render a transaction as a row in `TRANSACTION_COLUMNS` order
pub fn transaction_to_row(txn: &Transaction) -> Vec<String> {
    vec![
        txn.id().to_string(),
        txn.date().format("%Y-%m-%d").to_string(),
        txn.account().to_string(),
        txn.category().to_string(),
        txn.transaction_type().as_str().to_string(),
        txn.amount().to_decimal_string(),
        txn.notes().to_string(),
        txn.payor().unwrap_or_default().to_string(),
        txn.payee().unwrap_or_default().to_string(),
    ]
}

/// Render an account as a row in `ACCOUNT_COLUMNS` order
pub fn account_to_row(account: &Account) -> Vec<String> {
    vec![account.name.clone(), account.account_type.clone()]
}

/// Read an account from an accounts-sheet row
pub fn account_from_row(row: &CsvRow) -> TrackerResult<Account> {
    let name = row
        .non_blank("name")
        .ok_or_else(|| row_error(row, "missing account name"))?;
    Ok(match row.non_blank("type") {
        Some(account_type) => Account::with_type(name, account_type),
        None => Account::new(name),
    })
}

/// Read a transaction from a transactions-sheet or import row
pub fn transaction_from_row(row: &CsvRow) -> TrackerResult<Transaction> {
    let id = row
        .non_blank("id")
        .ok_or_else(|| row_error(row, "missing transaction id"))?;
    let kind = row.get("type");
    let transaction_type = TransactionType::parse(kind).ok_or_else(|| {
        row_error(
            row,
            &format!("unknown transaction type '{}': expected INCOME or EXPENSE", kind),
        )
    })?;
    let account = row
        .non_blank("account")
        .ok_or_else(|| row_error(row, "missing account name"))?;

    let amount = row
        .non_blank("amount")
        .or_else(|| row.non_blank("_amount"))
        .unwrap_or_default();

    let draft = TransactionDraft::new(kind, id, row.get("date"), account, amount)
        .with_category(row.get("category"))
        .with_notes(row.get("notes"));

    let counterparty = counterparty(row, transaction_type).to_string();
    let draft = match transaction_type {
        TransactionType::Income => draft.with_payor(counterparty),
        TransactionType::Expense => draft.with_payee(counterparty),
    };

    Transaction::create(draft).map_err(|e| match e {
        TrackerError::Validation(msg) => row_error(row, &msg),
        other => other,
    })
}

/// Pick the counterparty for a row
///
/// Preference: the kind's own column, then a legacy `party` column, then the
/// other role's column, then empty.
fn counterparty(row: &CsvRow, transaction_type: TransactionType) -> &str {
    let (own, other) = match transaction_type {
        TransactionType::Income => ("payor", "payee"),
        TransactionType::Expense => ("payee", "payor"),
    };
    row.non_blank(own)
        .or_else(|| row.non_blank("party"))
        .or_else(|| row.non_blank(other))
        .unwrap_or_default()
}

fn row_error(row: &CsvRow, message: &str) -> TrackerError {
    TrackerError::Validation(format!("Row {}: {}", row.line, message))
}
