//! Reporting service
//!
//! Summaries are recomputed from the stored ledger on every call.

use std::path::Path;

use crate::error::TrackerResult;
use crate::reports::{CategorySummary, Report, ALL_MONTHS_LABEL};
use crate::storage::LedgerRepository;

/// Service producing monthly summaries
pub struct ReportingService<'a> {
    repo: &'a dyn LedgerRepository,
}

impl<'a> ReportingService<'a> {
    pub fn new(repo: &'a dyn LedgerRepository) -> Self {
        Self { repo }
    }

    /// Summarize one `YYYY-MM` month, or everything when `month` is `None`
    pub fn monthly_summary(&self, month: Option<&str>) -> TrackerResult<Report> {
        let ledger = self.repo.load()?;
        let transactions = ledger.list_transactions(month)?;
        let label = match month.map(str::trim) {
            Some(m) if !m.is_empty() => m,
            _ => ALL_MONTHS_LABEL,
        };
        Report::from_transactions(label, &transactions)
    }

    /// Per-category totals only
    pub fn by_category(&self, month: Option<&str>) -> TrackerResult<Vec<CategorySummary>> {
        Ok(self.monthly_summary(month)?.by_category)
    }

    /// Build the summary and write it to `path`
    pub fn export(&self, month: Option<&str>, path: &Path) -> TrackerResult<Report> {
        let report = self.monthly_summary(month)?;
        self.repo.export_report(&report, path)?;
        Ok(report)
    }
}
