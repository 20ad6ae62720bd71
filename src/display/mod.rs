//! Display formatting for terminal output
//!
//! Plain-text tables for transactions, accounts and reports. Amounts and
//! dates are rendered through a [`DisplayFormat`] built from the settings.

pub mod account;
pub mod report;
pub mod transaction;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use tracing::warn;

use crate::config::settings::Settings;
use crate::models::Money;

pub use account::format_account_list;
pub use report::{format_category_table, format_report};
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_summary,
};

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency symbol and date format used by every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    currency_symbol: String,
    date_format: String,
}

impl DisplayFormat {
    /// Build a format, falling back to ISO dates when `date_format` is not
    /// a valid strftime pattern
    pub fn new(currency_symbol: impl Into<String>, date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        let date_format = if is_valid_date_format(&date_format) {
            date_format
        } else {
            warn!(date_format = %date_format, "invalid date format, using {}", DEFAULT_DATE_FORMAT);
            DEFAULT_DATE_FORMAT.to_string()
        };
        Self {
            currency_symbol: currency_symbol.into(),
            date_format,
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Render an amount with the configured symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Render a date with the configured pattern
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT)
    }
}

impl From<&Settings> for DisplayFormat {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.as_str(), settings.date_format.as_str())
    }
}

fn is_valid_date_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_settings_defaults() {
        assert_eq!(DisplayFormat::from(&Settings::default()), DisplayFormat::default());
    }

    #[test]
    fn test_custom_symbol_and_date() {
        let format = DisplayFormat::new("€", "%d/%m/%Y");
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();

        assert_eq!(format.date(date), "03/05/2024");
        assert_eq!(format.money(Money::from_cents(-1250)), "-€12.50");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let format = DisplayFormat::new("$", "%Q");
        assert_eq!(format.date_format(), "%Y-%m-%d");
        assert_eq!(DisplayFormat::new("$", "").date_format(), "%Y-%m-%d");
    }
}
