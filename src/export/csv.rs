//! CSV report export
//!
//! Two stacked tables: a one-row summary (`month,income,expense,net`), a
//! blank separator line, then the category breakdown
//! (`category,total,count`).

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::Report;

/// Export a report as CSV
pub fn export_report_csv<W: Write>(report: &Report, writer: &mut W) -> TrackerResult<()> {
    {
        let mut summary = ::csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(&mut *writer);
        summary.write_record(["month", "income", "expense", "net"])?;
        summary.write_record([
            report.month.clone(),
            report.income.to_decimal_string(),
            report.expense.to_decimal_string(),
            report.net.to_decimal_string(),
        ])?;
        summary.flush()?;
    }

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    let mut categories = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(&mut *writer);
    categories.write_record(["category", "total", "count"])?;
    for row in &report.by_category {
        categories.write_record([
            row.category.clone(),
            row.total.to_decimal_string(),
            row.count.to_string(),
        ])?;
    }
    categories.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_export_report_csv() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let salary = Money::from_cents(10000);
        let food = Money::from_cents(4000);
        let report = Report::from_transactions(
            "2024-05",
            &[
                Transaction::income("1", date, "Bank", "Salary", salary, "", "Boss"),
                Transaction::expense("2", date, "Bank", "Food, drink", food, "", "Cafe"),
            ],
        )
        .unwrap();

        let mut output = Vec::new();
        export_report_csv(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(
            text,
            "month,income,expense,net\n\
             2024-05,100.00,40.00,60.00\n\
             \n\
             category,total,count\n\
             Salary,100.00,1\n\
             \"Food, drink\",40.00,1\n"
        );
    }
}
