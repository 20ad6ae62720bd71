//! Core data models for the finance tracker
//!
//! This module contains the data structures of the bookkeeping domain:
//! accounts, transactions, the ledger that holds them, and the money and
//! month types they are expressed in.

pub mod account;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use account::{Account, DEFAULT_ACCOUNT_TYPE};
pub use ids::{IdGenerator, SequentialIdGenerator, TransactionId, UuidIdGenerator};
pub use ledger::Ledger;
pub use money::Money;
pub use month::YearMonth;
pub use transaction::{
    AmountInput, DateInput, Transaction, TransactionDraft, TransactionKind, TransactionType,
};
