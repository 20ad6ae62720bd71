//! Transaction model
//!
//! A transaction is either income (with the payor who paid) or an expense
//! (with the payee who was paid). Amounts are stored non-negative; the kind
//! decides the sign of the effective amount.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// The two kinds of transaction, without their counterparty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse a kind string, case-insensitively ("income", "EXPENSE", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Canonical upper-case name used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a transaction together with its counterparty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money received from `payor`
    Income { payor: String },
    /// Money paid to `payee`
    Expense { payee: String },
}

impl TransactionKind {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Income { .. } => TransactionType::Income,
            Self::Expense { .. } => TransactionType::Expense,
        }
    }

    /// The counterparty, whichever role it plays
    pub fn party(&self) -> &str {
        match self {
            Self::Income { payor } => payor,
            Self::Expense { payee } => payee,
        }
    }
}

/// A date given either as a value or as ISO-8601 text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    /// Resolve to a calendar date, parsing text input
    pub fn resolve(&self) -> TrackerResult<NaiveDate> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_iso_date(text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Parse an ISO-8601 date, or the date part of an ISO-8601 datetime
pub fn parse_iso_date(s: &str) -> TrackerResult<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.date_naive());
    }

    Err(TrackerError::Validation(format!(
        "Invalid date '{}': expected ISO-8601 (YYYY-MM-DD)",
        s
    )))
}

/// A submitted amount, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Value(Money),
    Decimal(f64),
    Text(String),
}

impl AmountInput {
    /// Normalize to a non-negative amount
    ///
    /// Negative, zero and non-numeric input all become exactly zero.
    pub fn normalize(&self) -> Money {
        match self {
            Self::Value(money) => money.clamp_non_negative(),
            Self::Decimal(value) => Money::from_f64(*value).clamp_non_negative(),
            Self::Text(text) => Money::coerce(text),
        }
    }
}

impl From<Money> for AmountInput {
    fn from(money: Money) -> Self {
        Self::Value(money)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Unvalidated input for `Transaction::create`
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    /// "INCOME" or "EXPENSE", any case
    pub kind: String,
    pub id: TransactionId,
    pub date: DateInput,
    pub account: String,
    pub category: String,
    pub amount: AmountInput,
    pub notes: String,
    /// Required for income
    pub payor: Option<String>,
    /// Required for expenses
    pub payee: Option<String>,
}

impl TransactionDraft {
    /// Start a draft with the fields every transaction needs
    pub fn new(
        kind: impl Into<String>,
        id: impl Into<TransactionId>,
        date: impl Into<DateInput>,
        account: impl Into<String>,
        amount: impl Into<AmountInput>,
    ) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            date: date.into(),
            account: account.into(),
            category: String::new(),
            amount: amount.into(),
            notes: String::new(),
            payor: None,
            payee: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_payor(mut self, payor: impl Into<String>) -> Self {
        self.payor = Some(payor.into());
        self
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }
}

/// A recorded income or expense
///
/// Immutable once built: every constructor routes the amount through the
/// non-negative clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    account: String,
    category: String,
    amount: Money,
    notes: String,
    kind: TransactionKind,
}

impl Transaction {
    /// Validate a draft and build the transaction it describes
    pub fn create(draft: TransactionDraft) -> TrackerResult<Self> {
        let transaction_type = TransactionType::parse(&draft.kind).ok_or_else(|| {
            TrackerError::Validation(format!(
                "Unknown transaction type '{}': expected INCOME or EXPENSE",
                draft.kind
            ))
        })?;

        let kind = match transaction_type {
            TransactionType::Income => TransactionKind::Income {
                payor: draft.payor.ok_or_else(|| {
                    TrackerError::Validation("Income transactions require a payor".into())
                })?,
            },
            TransactionType::Expense => TransactionKind::Expense {
                payee: draft.payee.ok_or_else(|| {
                    TrackerError::Validation("Expense transactions require a payee".into())
                })?,
            },
        };

        if draft.account.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Transactions require an account name".into(),
            ));
        }

        let date = draft.date.resolve()?;

        Ok(Self::build(
            draft.id,
            date,
            draft.account,
            draft.category,
            draft.amount.normalize(),
            draft.notes,
            kind,
        ))
    }

    /// Build an income transaction from already-typed values
    pub fn income(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        account: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        notes: impl Into<String>,
        payor: impl Into<String>,
    ) -> Self {
        Self::build(
            id.into(),
            date,
            account.into(),
            category.into(),
            amount,
            notes.into(),
            TransactionKind::Income {
                payor: payor.into(),
            },
        )
    }

    /// Build an expense transaction from already-typed values
    pub fn expense(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        account: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        notes: impl Into<String>,
        payee: impl Into<String>,
    ) -> Self {
        Self::build(
            id.into(),
            date,
            account.into(),
            category.into(),
            amount,
            notes.into(),
            TransactionKind::Expense {
                payee: payee.into(),
            },
        )
    }

    fn build(
        id: TransactionId,
        date: NaiveDate,
        account: String,
        category: String,
        amount: Money,
        notes: String,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            date,
            account,
            category,
            amount: amount.clamp_non_negative(),
            notes,
            kind,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Name of the account this transaction is recorded against
    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Stored (non-negative) amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.kind.transaction_type()
    }

    /// The payor for income, the payee for expenses
    pub fn party(&self) -> &str {
        self.kind.party()
    }

    pub fn payor(&self) -> Option<&str> {
        match &self.kind {
            TransactionKind::Income { payor } => Some(payor),
            TransactionKind::Expense { .. } => None,
        }
    }

    pub fn payee(&self) -> Option<&str> {
        match &self.kind {
            TransactionKind::Expense { payee } => Some(payee),
            TransactionKind::Income { .. } => None,
        }
    }

    /// Signed amount: positive for income, negative for expenses
    pub fn effective_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income { .. } => self.amount,
            TransactionKind::Expense { .. } => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income { .. })
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense { .. })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.transaction_type(),
            self.effective_amount(),
            self.party(),
            self.account
        )
    }
}
