//! The six insight reductions.
//!
//! Each reduction is independent: sparse data degrades one metric to its
//! sentinel value without affecting the others.

use std::collections::BTreeMap;

use crate::InsightsParams;
use crate::months::{NOT_AVAILABLE, month_name};
use crate::records::TransactionRecord;
use crate::report::{
    AvgTransactionSize, BestPerformingMonth, IncomeVsExpense, LowestIncomeMonth, MonthTrend,
    TopSpendingCategory, TrendDirection,
};
use crate::rollup::{MonthTotals, reference_debits};

/// Rounds to one decimal (reported percentages and rates).
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimals (reported monetary amounts).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Month with the highest savings rate among months that earned and saved.
///
/// Strict comparison keeps the earliest month on rate ties.
pub(crate) fn best_performing_month(months: &BTreeMap<u32, MonthTotals>) -> BestPerformingMonth {
    let mut best: Option<(u32, f64, f64)> = None;

    for (&month, totals) in months {
        if totals.total_credit <= 0.0 {
            continue;
        }
        let savings = totals.savings();
        if savings <= 0.0 {
            continue;
        }
        let rate = savings / totals.total_credit * 100.0;
        if best.is_none_or(|(_, best_rate, _)| rate > best_rate) {
            best = Some((month, rate, savings));
        }
    }

    match best {
        Some((month, rate, savings)) => BestPerformingMonth {
            month: month_name(month).to_string(),
            savings_rate: round1(rate),
            amount_saved: savings.round() as i64,
        },
        None => BestPerformingMonth {
            month: NOT_AVAILABLE.to_string(),
            savings_rate: 0.0,
            amount_saved: 0,
        },
    }
}

/// Month with the smallest non-zero debit total (the legacy "income" label
/// notwithstanding).
pub(crate) fn lowest_income_month(months: &BTreeMap<u32, MonthTotals>) -> LowestIncomeMonth {
    let mut lowest: Option<(u32, f64)> = None;

    for (&month, totals) in months {
        if totals.total_debit <= 0.0 {
            continue;
        }
        if lowest.is_none_or(|(_, best)| totals.total_debit < best) {
            lowest = Some((month, totals.total_debit));
        }
    }

    match lowest {
        Some((month, income)) => LowestIncomeMonth {
            month: month_name(month).to_string(),
            income: round2(income),
        },
        None => LowestIncomeMonth {
            month: NOT_AVAILABLE.to_string(),
            income: 0.0,
        },
    }
}

/// Category with the largest share of the reference month's debits.
pub(crate) fn top_spending_category(categories: &BTreeMap<String, f64>) -> TopSpendingCategory {
    let grand_total: f64 = categories.values().sum();
    let mut top: Option<(&str, f64)> = None;

    for (label, &total) in categories {
        if top.is_none_or(|(_, best)| total > best) {
            top = Some((label, total));
        }
    }

    match top {
        Some((label, total)) => TopSpendingCategory {
            category: label.to_string(),
            percentage: if grand_total > 0.0 {
                round1(total / grand_total * 100.0)
            } else {
                0.0
            },
        },
        None => TopSpendingCategory {
            category: NOT_AVAILABLE.to_string(),
            percentage: 0.0,
        },
    }
}

/// Debit change of the reference month versus the previous month.
///
/// January has no previous month, so its baseline is 0.
pub(crate) fn month_trend(
    params: &InsightsParams,
    months: &BTreeMap<u32, MonthTotals>,
) -> MonthTrend {
    let debit_of = |month: u32| months.get(&month).map_or(0.0, |t| t.total_debit);

    let current = debit_of(params.month());
    let previous = if params.month() == 1 {
        0.0
    } else {
        debit_of(params.month() - 1)
    };

    let signed_change = if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    };

    let trend = if signed_change < 0.0 {
        TrendDirection::Downward
    } else {
        TrendDirection::Upward
    };

    MonthTrend {
        trend,
        percentage_change: round1(signed_change.abs()),
    }
}

/// Average debit size in the reference month.
///
/// Only records whose stored amount is numeric participate, in both the sum
/// and the count.
pub(crate) fn avg_transaction_size(
    params: &InsightsParams,
    records: &[TransactionRecord],
) -> AvgTransactionSize {
    let amounts: Vec<f64> = reference_debits(params, records)
        .filter_map(|record| record.amount.as_decimal())
        .collect();

    if amounts.is_empty() {
        return AvgTransactionSize {
            amount: 0.0,
            transaction_count: 0,
        };
    }

    let total: f64 = amounts.iter().sum();
    AvgTransactionSize {
        amount: round2(total / amounts.len() as f64),
        transaction_count: amounts.len(),
    }
}

/// Credit-to-debit ratio of the reference month.
pub(crate) fn income_vs_expense(
    params: &InsightsParams,
    months: &BTreeMap<u32, MonthTotals>,
) -> IncomeVsExpense {
    let totals = months
        .get(&params.month())
        .copied()
        .unwrap_or_default();

    if totals.total_debit > 0.0 {
        IncomeVsExpense {
            ratio: format!("{:.1} : 1", totals.total_credit / totals.total_debit),
            percentage_higher: round1(
                (totals.total_credit - totals.total_debit) / totals.total_debit * 100.0,
            ),
        }
    } else {
        IncomeVsExpense {
            ratio: NOT_AVAILABLE.to_string(),
            percentage_higher: 0.0,
        }
    }
}
