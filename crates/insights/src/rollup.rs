//! Grouping/reduction helpers shared by the metrics.
//!
//! Months are keyed 1–12 in a `BTreeMap`, so iteration is chronological and
//! the "earliest month wins" tie-breaks in the metrics fall out of the
//! iteration order. Categories are keyed by label, so a tie between two
//! categories resolves to the lexicographically first one.

use std::collections::BTreeMap;

use crate::InsightsParams;
use crate::records::{TransactionKind, TransactionRecord};

/// Credit and debit totals of one calendar month.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MonthTotals {
    pub total_credit: f64,
    pub total_debit: f64,
}

impl MonthTotals {
    pub fn savings(&self) -> f64 {
        self.total_credit - self.total_debit
    }
}

/// Rolls up the year's records into per-month credit/debit totals.
///
/// Only non-deleted records of the requested group and year participate.
/// Non-numeric stored amounts count as 0.
pub fn monthly_totals(
    params: &InsightsParams,
    records: &[TransactionRecord],
) -> BTreeMap<u32, MonthTotals> {
    let mut months: BTreeMap<u32, MonthTotals> = BTreeMap::new();

    for record in records {
        if !record.counts_for(params.group_id(), params.year()) {
            continue;
        }
        let totals = months.entry(record.month()).or_default();
        match record.kind {
            TransactionKind::Credit => totals.total_credit += record.amount.as_decimal_or_zero(),
            TransactionKind::Debit => totals.total_debit += record.amount.as_decimal_or_zero(),
        }
    }

    months
}

/// Sums the reference month's debits per category label.
///
/// Blank and missing categories are folded to "Unknown" before grouping.
pub fn category_debits(
    params: &InsightsParams,
    records: &[TransactionRecord],
) -> BTreeMap<String, f64> {
    let mut categories: BTreeMap<String, f64> = BTreeMap::new();

    for record in reference_debits(params, records) {
        *categories
            .entry(record.category_label().to_string())
            .or_insert(0.0) += record.amount.as_decimal_or_zero();
    }

    categories
}

/// Debit records of the reference month.
pub(crate) fn reference_debits<'a>(
    params: &'a InsightsParams,
    records: &'a [TransactionRecord],
) -> impl Iterator<Item = &'a TransactionRecord> {
    records.iter().filter(|record| {
        record.counts_for(params.group_id(), params.year())
            && record.kind == TransactionKind::Debit
            && record.month() == params.month()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(
        kind: TransactionKind,
        amount: impl Into<crate::StoredAmount>,
        category: Option<&str>,
        month: u32,
    ) -> TransactionRecord {
        TransactionRecord::new("g1", kind, amount, category, date(2024, month, 15))
    }

    fn params() -> InsightsParams {
        InsightsParams::new("g1", 2024, 3).unwrap()
    }

    #[test]
    fn totals_are_split_by_month_and_kind() {
        let records = vec![
            record(TransactionKind::Credit, 1000.0, None, 1),
            record(TransactionKind::Debit, 250.0, None, 1),
            record(TransactionKind::Debit, 100.0, None, 2),
        ];

        let months = monthly_totals(&params(), &records);
        assert_eq!(months.len(), 2);
        assert_eq!(months[&1].total_credit, 1000.0);
        assert_eq!(months[&1].total_debit, 250.0);
        assert_eq!(months[&2].total_credit, 0.0);
        assert_eq!(months[&2].total_debit, 100.0);
    }

    #[test]
    fn non_numeric_amounts_sum_as_zero() {
        let records = vec![
            record(TransactionKind::Debit, "garbled", None, 1),
            record(TransactionKind::Debit, 80.0, None, 1),
        ];

        let months = monthly_totals(&params(), &records);
        assert_eq!(months[&1].total_debit, 80.0);
    }

    #[test]
    fn deleted_and_foreign_records_are_excluded() {
        let mut deleted = record(TransactionKind::Credit, 500.0, None, 1);
        deleted.deleted = true;
        let mut foreign = record(TransactionKind::Credit, 500.0, None, 1);
        foreign.group_id = "g2".to_string();
        let other_year = TransactionRecord::new(
            "g1",
            TransactionKind::Credit,
            500.0,
            None,
            date(2023, 1, 15),
        );

        let months = monthly_totals(&params(), &[deleted, foreign, other_year]);
        assert!(months.is_empty());
    }

    #[test]
    fn category_sums_cover_only_the_reference_month_debits() {
        let records = vec![
            record(TransactionKind::Debit, 300.0, Some("Rent"), 3),
            record(TransactionKind::Debit, 200.0, Some("Rent"), 3),
            record(TransactionKind::Debit, 50.0, Some(""), 3),
            record(TransactionKind::Credit, 900.0, Some("Salary"), 3),
            record(TransactionKind::Debit, 75.0, Some("Rent"), 4),
        ];

        let categories = category_debits(&params(), &records);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories["Rent"], 500.0);
        assert_eq!(categories[crate::UNKNOWN_CATEGORY], 50.0);
    }
}
