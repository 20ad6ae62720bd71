//! Transaction display formatting
//!
//! Register and detail views for the terminal.

use crate::models::{Money, Transaction};

use super::DisplayFormat;

/// Format a transaction as one line: date, type, signed amount, party and account
pub fn format_transaction_summary(txn: &Transaction, format: &DisplayFormat) -> String {
    format!(
        "{} {} {} {} ({})",
        format.date(txn.date()),
        txn.transaction_type(),
        format.money(txn.effective_amount()),
        txn.party(),
        txn.account()
    )
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, format: &DisplayFormat) -> String {
    format!(
        "{:8} {:10} {:7} {:16} {:16} {:20} {:>12}",
        txn.id().short(),
        format.date(txn.date()),
        txn.transaction_type().as_str(),
        truncate(txn.account(), 16),
        truncate(display_or(txn.category(), "(none)"), 16),
        truncate(display_or(txn.party(), "(no party)"), 20),
        format.money(txn.effective_amount())
    )
}

/// Format a list of transactions as a register with a net total
pub fn format_transaction_register(
    transactions: &[Transaction],
    format: &DisplayFormat,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:7} {:16} {:16} {:20} {:>12}\n",
        "ID", "Date", "Type", "Account", "Category", "Party", "Amount"
    ));
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, format));
        output.push('\n');
    }

    let net: Money = transactions.iter().map(Transaction::effective_amount).sum();
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:>width$} {:>12}\n",
        format!("Net ({} transactions):", transactions.len()),
        format.money(net),
        width = REGISTER_WIDTH - 13
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, format: &DisplayFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id()));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type()));
    output.push_str(&format!("Date:        {}\n", format.date(txn.date())));
    output.push_str(&format!("Account:     {}\n", txn.account()));
    output.push_str(&format!("Amount:      {}\n", format.money(txn.amount())));

    if txn.is_income() {
        output.push_str(&format!("Payor:       {}\n", txn.party()));
    } else {
        output.push_str(&format!("Payee:       {}\n", txn.party()));
    }

    output.push_str(&format!(
        "Category:    {}\n",
        display_or(txn.category(), "(uncategorized)")
    ));

    if !txn.notes().is_empty() {
        output.push_str(&format!("Notes:       {}\n", txn.notes()));
    }

    output
}

const REGISTER_WIDTH: usize = 96;

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
