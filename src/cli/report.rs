//! Report CLI command

use std::path::PathBuf;

use clap::Args;

use crate::display::report::{format_category_table, format_report};
use crate::display::DisplayFormat;
use crate::error::TrackerResult;
use crate::services::ReportingService;
use crate::storage::LedgerRepository;

/// Arguments for `report`
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Month to summarize (YYYY-MM); all months when omitted
    #[arg(short, long)]
    pub month: Option<String>,
    /// Only print the per-category breakdown
    #[arg(long)]
    pub by_category: bool,
    /// Also write the report to a file (.csv, .json, .yaml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `report`
pub fn handle_report_command(
    repo: &dyn LedgerRepository,
    format: &DisplayFormat,
    args: ReportArgs,
) -> TrackerResult<()> {
    let service = ReportingService::new(repo);
    let month = args.month.as_deref();

    let report = match &args.output {
        Some(path) => {
            let report = service.export(month, path)?;
            println!("Report written to {}", path.display());
            report
        }
        None => service.monthly_summary(month)?,
    };

    if args.by_category {
        print!("{}", format_category_table(&report.by_category, format));
    } else {
        print!("{}", format_report(&report, format));
    }

    Ok(())
}
