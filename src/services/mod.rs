//! Service layer for the finance tracker
//!
//! The service layer provides the bookkeeping operations on top of a
//! `LedgerRepository`, handling validation and id assignment.

pub mod account;
pub mod reporting;
pub mod transaction;

pub use account::AccountService;
pub use reporting::ReportingService;
pub use transaction::{RecordTransactionInput, TransactionService};
