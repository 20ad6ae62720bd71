//! Reports module for the finance tracker
//!
//! Reports are derived data: they are recomputed from the ledger on every
//! request and never stored as a source of truth.

pub mod monthly;

pub use monthly::{CategorySummary, Report, ALL_MONTHS_LABEL};
