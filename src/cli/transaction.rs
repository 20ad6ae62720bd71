//! Transaction CLI commands
//!
//! `income`, `expense`, `list` and `show`.

use chrono::Local;
use clap::Args;

use crate::display::transaction::{
    format_transaction_details, format_transaction_register, format_transaction_summary,
};
use crate::display::DisplayFormat;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId, TransactionType};
use crate::services::{RecordTransactionInput, TransactionService};
use crate::storage::LedgerRepository;

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Amount (e.g., "12.50"); negative or unparseable amounts are stored as 0
    pub amount: String,
    /// Account name; created with the default type if it does not exist
    #[arg(short, long)]
    pub account: String,
    /// Category
    #[arg(short, long, default_value = "")]
    pub category: String,
    /// Transaction date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Free-form notes
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

/// Arguments for `income`
#[derive(Args, Debug, Clone)]
pub struct IncomeArgs {
    #[command(flatten)]
    pub record: RecordArgs,
    /// Who paid
    #[arg(short, long)]
    pub payor: String,
}

/// Arguments for `expense`
#[derive(Args, Debug, Clone)]
pub struct ExpenseArgs {
    #[command(flatten)]
    pub record: RecordArgs,
    /// Who was paid
    #[arg(short = 'e', long)]
    pub payee: String,
}

fn to_input(args: RecordArgs, party: String) -> RecordTransactionInput {
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    RecordTransactionInput::new(date, args.account, args.amount, party)
        .with_category(args.category)
        .with_notes(args.notes)
}

fn record(
    repo: &dyn LedgerRepository,
    format: &DisplayFormat,
    kind: TransactionType,
    input: RecordTransactionInput,
) -> TrackerResult<()> {
    let service = TransactionService::new(repo);
    let id = service.record(kind.as_str(), input)?;

    if let Some(txn) = service.get(&id)? {
        println!(
            "Recorded {}: {}",
            kind.as_str().to_lowercase(),
            format_transaction_summary(&txn, format)
        );
    }
    println!("  ID: {}", id);
    Ok(())
}

/// Handle `income`
pub fn handle_income_command(
    repo: &dyn LedgerRepository,
    format: &DisplayFormat,
    args: IncomeArgs,
) -> TrackerResult<()> {
    let input = to_input(args.record, args.payor);
    record(repo, format, TransactionType::Income, input)
}

/// Handle `expense`
pub fn handle_expense_command(
    repo: &dyn LedgerRepository,
    format: &DisplayFormat,
    args: ExpenseArgs,
) -> TrackerResult<()> {
    let input = to_input(args.record, args.payee);
    record(repo, format, TransactionType::Expense, input)
}

/// Handle `list`
pub fn handle_list_command(
    repo: &dyn LedgerRepository,
    format: &DisplayFormat,
    month: Option<String>,
) -> TrackerResult<()> {
    let transactions = TransactionService::new(repo).list(month.as_deref())?;
    print!("{}", format_transaction_register(&transactions, format));
    Ok(())
}

/// Handle `show`
///
/// Accepts a full id or an unambiguous prefix (as printed by `list`).
pub fn handle_show_command(
    repo: &dyn LedgerRepository,
    format: &DisplayFormat,
    id: &str,
) -> TrackerResult<()> {
    let service = TransactionService::new(repo);
    let txn = match service.get(&TransactionId::from(id))? {
        Some(txn) => txn,
        None => find_by_prefix(service.list(None)?, id)?,
    };
    print!("{}", format_transaction_details(&txn, format));
    Ok(())
}

fn find_by_prefix(transactions: Vec<Transaction>, prefix: &str) -> TrackerResult<Transaction> {
    let mut matches: Vec<Transaction> = transactions
        .into_iter()
        .filter(|t| !prefix.is_empty() && t.id().as_str().starts_with(prefix))
        .collect();

    match matches.len() {
        0 => Err(TrackerError::transaction_not_found(prefix)),
        1 => Ok(matches.remove(0)),
        n => Err(TrackerError::Validation(format!(
            "'{}' matches {} transactions; use a longer id",
            prefix, n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(id: &str) -> Transaction {
        Transaction::expense(
            id,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Bank",
            "",
            Money::from_cents(1),
            "",
            "Shop",
        )
    }

    #[test]
    fn test_find_by_prefix() {
        let all = vec![txn("abc123"), txn("abd456")];

        assert_eq!(find_by_prefix(all.clone(), "abc").unwrap().id().as_str(), "abc123");
        assert!(find_by_prefix(all.clone(), "ab").unwrap_err().is_validation());
        assert!(find_by_prefix(all.clone(), "zzz").unwrap_err().is_not_found());
        assert!(find_by_prefix(all, "").unwrap_err().is_not_found());
    }
}
