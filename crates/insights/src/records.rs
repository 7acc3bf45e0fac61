//! Transaction record primitives.
//!
//! A `TransactionRecord` is one row of source data: a credit or debit with a
//! category, a calendar date and an owning group. Rows come from legacy
//! storage with loose typing, so the shape absorbs what the upstream tables
//! actually contain: the stored amount may be non-numeric text and the
//! category may be blank.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Category label used when a record carries no usable category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Maps the legacy type identifier: `1` is a credit, anything else a
    /// debit.
    pub fn from_type_id(type_id: i64) -> Self {
        if type_id == 1 { Self::Credit } else { Self::Debit }
    }
}

/// Amount as stored upstream.
///
/// Legacy rows may carry the amount as text, including text that does not
/// parse as a number at all. The raw value is kept as-is and coerced with
/// [`StoredAmount::as_decimal_or_zero`] at aggregation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredAmount {
    Number(f64),
    Text(String),
}

impl StoredAmount {
    /// Numeric value of the stored amount, if it has one.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(raw) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Numeric value with non-numeric text coerced to 0.
    pub fn as_decimal_or_zero(&self) -> f64 {
        self.as_decimal().unwrap_or(0.0)
    }
}

impl From<f64> for StoredAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StoredAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One financial event of a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub group_id: String,
    pub kind: TransactionKind,
    pub amount: StoredAmount,
    pub category: Option<String>,
    pub occurred_on: NaiveDate,
    /// Soft-delete flag; deleted records are excluded from all aggregation.
    #[serde(default)]
    pub deleted: bool,
}

impl TransactionRecord {
    pub fn new(
        group_id: &str,
        kind: TransactionKind,
        amount: impl Into<StoredAmount>,
        category: Option<&str>,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            group_id: group_id.to_string(),
            kind,
            amount: amount.into(),
            category: category.map(|s| s.to_string()),
            occurred_on,
            deleted: false,
        }
    }

    /// Category label with blank/missing values folded to "Unknown".
    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => UNKNOWN_CATEGORY,
        }
    }

    /// True when the record participates in aggregation for `group_id` and
    /// `year`.
    pub(crate) fn counts_for(&self, group_id: &str, year: i32) -> bool {
        !self.deleted && self.group_id == group_id && self.occurred_on.year() == year
    }

    pub fn month(&self) -> u32 {
        self.occurred_on.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn type_id_one_is_credit_everything_else_debit() {
        assert_eq!(TransactionKind::from_type_id(1), TransactionKind::Credit);
        assert_eq!(TransactionKind::from_type_id(0), TransactionKind::Debit);
        assert_eq!(TransactionKind::from_type_id(2), TransactionKind::Debit);
        assert_eq!(TransactionKind::from_type_id(-1), TransactionKind::Debit);
    }

    #[test]
    fn stored_amount_coerces_non_numeric_to_zero() {
        assert_eq!(StoredAmount::from(12.5).as_decimal_or_zero(), 12.5);
        assert_eq!(StoredAmount::from(" 42.50 ").as_decimal_or_zero(), 42.5);
        assert_eq!(StoredAmount::from("twelve").as_decimal_or_zero(), 0.0);
        assert_eq!(StoredAmount::from("").as_decimal_or_zero(), 0.0);
        assert_eq!(StoredAmount::Number(f64::NAN).as_decimal_or_zero(), 0.0);
    }

    #[test]
    fn stored_amount_deserializes_numbers_and_text() {
        let number: StoredAmount = serde_json::from_str("99.9").unwrap();
        assert_eq!(number.as_decimal(), Some(99.9));

        let text: StoredAmount = serde_json::from_str("\"not a number\"").unwrap();
        assert_eq!(text.as_decimal(), None);
    }

    #[test]
    fn blank_category_folds_to_unknown() {
        let mut record = TransactionRecord::new(
            "g1",
            TransactionKind::Debit,
            10.0,
            None,
            date(2024, 3, 1),
        );
        assert_eq!(record.category_label(), UNKNOWN_CATEGORY);

        record.category = Some("   ".to_string());
        assert_eq!(record.category_label(), UNKNOWN_CATEGORY);

        record.category = Some("Groceries".to_string());
        assert_eq!(record.category_label(), "Groceries");
    }

    #[test]
    fn deleted_and_foreign_records_do_not_count() {
        let mut record = TransactionRecord::new(
            "g1",
            TransactionKind::Credit,
            10.0,
            None,
            date(2024, 5, 2),
        );
        assert!(record.counts_for("g1", 2024));
        assert!(!record.counts_for("g2", 2024));
        assert!(!record.counts_for("g1", 2023));

        record.deleted = true;
        assert!(!record.counts_for("g1", 2024));
    }
}
