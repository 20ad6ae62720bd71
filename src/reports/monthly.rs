//! Monthly summary report
//!
//! Aggregates a set of transactions into income, expense, net and
//! per-category totals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction};

/// Label used for reports that cover every month
pub const ALL_MONTHS_LABEL: &str = "all";

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category name, exactly as recorded
    pub category: String,
    /// Sum of absolute effective amounts
    pub total: Money,
    /// Number of transactions contributing
    pub count: usize,
}

/// Income, expense and category breakdown for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// `YYYY-MM`, or "all" when unrestricted
    pub month: String,
    /// Sum of positive effective amounts
    pub income: Money,
    /// Sum of the magnitudes of negative effective amounts
    pub expense: Money,
    /// income - expense
    pub net: Money,
    /// Per-category totals, in order of first appearance
    pub by_category: Vec<CategorySummary>,
}

impl Report {
    /// Aggregate the given transactions under a month label
    ///
    /// Zero-amount transactions count toward their category but not toward
    /// income or expense. Categories are grouped by exact string match.
    /// Totals too large to represent are a validation error.
    pub fn from_transactions(
        month: impl Into<String>,
        transactions: &[Transaction],
    ) -> TrackerResult<Self> {
        let month = month.into();
        let overflow = || {
            TrackerError::Validation(format!(
                "Totals for {} are too large to report",
                month
            ))
        };

        let mut income = Money::zero();
        let mut expense = Money::zero();
        let mut by_category: Vec<CategorySummary> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for txn in transactions {
            let effective = txn.effective_amount();
            if effective.is_positive() {
                income = income.checked_add(effective).ok_or_else(overflow)?;
            } else if effective.is_negative() {
                expense = expense.checked_sub(effective).ok_or_else(overflow)?;
            }

            let idx = *positions.entry(txn.category()).or_insert_with(|| {
                by_category.push(CategorySummary {
                    category: txn.category().to_string(),
                    total: Money::zero(),
                    count: 0,
                });
                by_category.len() - 1
            });
            let summary = &mut by_category[idx];
            summary.total = summary
                .total
                .checked_add(effective.abs())
                .ok_or_else(overflow)?;
            summary.count += 1;
        }

        let net = income.checked_sub(expense).ok_or_else(overflow)?;
        Ok(Self {
            month,
            income,
            expense,
            net,
            by_category,
        })
    }

    /// Look up a category's totals by exact name
    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        self.by_category.iter().find(|c| c.category == name)
    }

    /// Number of transactions the report covers
    pub fn transaction_count(&self) -> usize {
        self.by_category.iter().map(|c| c.count).sum()
    }
}
