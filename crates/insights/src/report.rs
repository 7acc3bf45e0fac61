//! The insights record produced by the aggregation.
//!
//! Every field is always populated: a metric that cannot be computed carries
//! its documented "N/A"/zero sentinel instead of being absent.

use serde::{Deserialize, Serialize};

/// Direction of the month-over-month spending trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Upward,
    Downward,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upward => "Upward",
            Self::Downward => "Downward",
        }
    }
}

/// Month with the highest savings rate among the months that saved money.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestPerformingMonth {
    pub month: String,
    /// (credit − debit) / credit × 100, rounded to one decimal.
    pub savings_rate: f64,
    /// credit − debit, rounded to the nearest whole amount.
    pub amount_saved: i64,
}

/// Month with the smallest non-zero debit total.
///
/// The legacy dashboard labels this metric "income" even though it is
/// computed from debits; the literal behavior is kept. See DESIGN.md.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LowestIncomeMonth {
    pub month: String,
    pub income: f64,
}

/// Category with the largest share of the reference month's debits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopSpendingCategory {
    pub category: String,
    pub percentage: f64,
}

/// Debit change of the reference month versus the previous month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthTrend {
    pub trend: TrendDirection,
    /// Absolute value of the percent change, rounded to one decimal.
    pub percentage_change: f64,
}

/// Average debit size in the reference month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvgTransactionSize {
    pub amount: f64,
    pub transaction_count: usize,
}

/// Credit-to-debit ratio of the reference month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomeVsExpense {
    /// `"{credit/debit} : 1"` with one decimal, or "N/A" when there are no
    /// debits.
    pub ratio: String,
    pub percentage_higher: f64,
}

/// The six derived metrics for one group, year and reference month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub best_performing_month: BestPerformingMonth,
    pub lowest_income_month: LowestIncomeMonth,
    pub top_spending_category: TopSpendingCategory,
    pub month_trend: MonthTrend,
    pub avg_transaction_size: AvgTransactionSize,
    pub income_vs_expense: IncomeVsExpense,
}
