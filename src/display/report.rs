//! Report formatting utilities for terminal output

use crate::models::Money;
use crate::reports::{CategorySummary, Report};

use super::transaction::truncate;
use super::DisplayFormat;

const REPORT_WIDTH: usize = 44;

/// Format the income / expense / net summary with its category breakdown
pub fn format_report(report: &Report, format: &DisplayFormat) -> String {
    let mut output = String::new();

    let title = if report.month == crate::reports::ALL_MONTHS_LABEL {
        "Summary: all months".to_string()
    } else {
        format!("Summary: {}", report.month)
    };
    output.push_str(&format_header(&title, REPORT_WIDTH));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&summary_line("Income", report.income, format));
    output.push_str(&summary_line("Expense", report.expense, format));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&summary_line("Net", report.net, format));
    output.push('\n');
    output.push_str(&format_category_table(&report.by_category, format));

    output
}

/// Format the per-category breakdown
pub fn format_category_table(categories: &[CategorySummary], format: &DisplayFormat) -> String {
    if categories.is_empty() {
        return "No transactions in this period.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:>6} {:>12}\n", "Category", "Count", "Total"));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for row in categories {
        let name = if row.category.is_empty() {
            "(uncategorized)"
        } else {
            row.category.as_str()
        };
        output.push_str(&format!(
            "{:<24} {:>6} {:>12}\n",
            truncate(name, 24),
            row.count,
            format.money(row.total)
        ));
    }

    output
}

fn summary_line(label: &str, amount: Money, format: &DisplayFormat) -> String {
    format!("{:<31} {:>12}\n", format!("{}:", label), format.money(amount))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
