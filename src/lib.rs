//! Finance Tracker - personal income and expense bookkeeping
//!
//! Records income and expense transactions against named accounts, keeps
//! them in a ledger persisted as CSV tables, and produces monthly summaries
//! with per-category totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, accounts, transactions, the ledger)
//! - `storage`: Repository trait, CSV snapshot storage and import
//! - `services`: Recording, account and reporting operations
//! - `reports`: Monthly summary computation
//! - `export`: Report export (CSV, JSON, YAML)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `tracker` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::services::{RecordTransactionInput, ReportingService, TransactionService};
//! use finance_tracker::storage::MemoryLedgerRepository;
//!
//! let repo = MemoryLedgerRepository::new();
//! TransactionService::new(&repo)
//!     .record_income(RecordTransactionInput::new("2024-05-01", "Bank", 100.0, "Employer"))?;
//! let report = ReportingService::new(&repo).monthly_summary(Some("2024-05"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
