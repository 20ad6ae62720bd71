//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod import;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use import::handle_import_command;
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{
    handle_expense_command, handle_income_command, handle_list_command, handle_show_command,
    ExpenseArgs, IncomeArgs, RecordArgs,
};
