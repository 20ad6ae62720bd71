//! Storage layer for the finance tracker
//!
//! The ledger is persisted as a snapshot of two CSV tables (accounts and
//! transactions) written with atomic renames. Everything above this layer
//! talks to a `LedgerRepository`, so tests can swap in the in-memory one.

pub mod csv_repository;
pub mod file_io;
pub mod import;
pub mod memory;
pub mod rows;

use std::path::Path;

pub use csv_repository::CsvLedgerRepository;
pub use file_io::{read_csv_table, write_atomic, write_csv_atomic, CsvRow, CsvTable};
pub use import::{import_into, merge_transactions, read_import_file};
pub use memory::MemoryLedgerRepository;

use crate::error::TrackerResult;
use crate::models::Ledger;
use crate::reports::Report;

/// Persistence contract for a whole ledger
pub trait LedgerRepository {
    /// Load the ledger. A missing or unreadable snapshot yields an empty ledger.
    fn load(&self) -> TrackerResult<Ledger>;

    /// Replace the stored snapshot with `ledger`
    fn save(&self, ledger: &Ledger) -> TrackerResult<()>;

    /// Merge transactions from an external file into `ledger`
    ///
    /// Returns the number of transactions added.
    fn import_transactions(&self, path: &Path, ledger: &mut Ledger) -> TrackerResult<usize> {
        import::import_into(path, ledger)
    }

    /// Write a report to `path`
    fn export_report(&self, report: &Report, path: &Path) -> TrackerResult<()> {
        crate::export::write_report(report, path)
    }

    /// Load, apply `apply`, then save
    ///
    /// Nothing is saved when `apply` fails. Implementations that can be
    /// shared between threads serialize the whole cycle.
    fn update(&self, apply: &mut dyn FnMut(&mut Ledger) -> TrackerResult<()>) -> TrackerResult<()> {
        let mut ledger = self.load()?;
        apply(&mut ledger)?;
        self.save(&ledger)
    }
}
