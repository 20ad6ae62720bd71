//! JSON report export
//!
//! Amounts are written as decimal strings ("100.00") so the output reads the
//! same as the CSV export and carries no float rounding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::Report;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable form of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: SummaryRow,

    pub by_category: Vec<CategoryRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub month: String,
    pub income: String,
    pub expense: String,
    pub net: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub total: String,
    pub count: usize,
}

impl ReportExport {
    pub fn from_report(report: &Report) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: SummaryRow {
                month: report.month.clone(),
                income: report.income.to_decimal_string(),
                expense: report.expense.to_decimal_string(),
                net: report.net.to_decimal_string(),
            },
            by_category: report
                .by_category
                .iter()
                .map(|c| CategoryRow {
                    category: c.category.clone(),
                    total: c.total.to_decimal_string(),
                    count: c.count,
                })
                .collect(),
        }
    }
}

/// Export a report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &Report, writer: &mut W) -> TrackerResult<()> {
    let export = ReportExport::from_report(report);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
