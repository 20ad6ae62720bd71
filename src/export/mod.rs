//! Report export
//!
//! Writes a `Report` to a tabular destination:
//! - CSV: a summary table followed by a category table (spreadsheet-compatible)
//! - JSON: for machine-readable output
//! - YAML: for human-readable output
//!
//! The format is chosen from the destination's file extension.

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

use tracing::info;

use crate::error::TrackerResult;
use crate::reports::Report;
use crate::storage::file_io::write_atomic;

pub use self::csv::export_report_csv;
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_report_yaml;

/// Output format for report export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick a format from a path's extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }
}

/// Write a report to `path` in the format its extension implies
pub fn write_report<P: AsRef<Path>>(report: &Report, path: P) -> TrackerResult<()> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path);

    write_atomic(path, |writer| match format {
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, writer),
        ExportFormat::Yaml => export_report_yaml(report, writer),
    })?;

    info!(file = %path.display(), month = %report.month, ?format, "exported report");
    Ok(())
}
