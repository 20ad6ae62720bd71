//! YAML report export

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::ReportExport;
use crate::reports::Report;
use std::io::Write;

/// Export a report as YAML, with a short comment header
pub fn export_report_yaml<W: Write>(report: &Report, writer: &mut W) -> TrackerResult<()> {
    let export = ReportExport::from_report(report);

    writeln!(writer, "# Finance tracker report for {}", report.month)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
