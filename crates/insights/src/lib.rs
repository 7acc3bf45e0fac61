//! Derived financial insights over a group's transaction records.
//!
//! The crate implements one computation: given the raw credit/debit records
//! of a group plus a target year and reference month, derive the six
//! human-facing metrics shown on the dashboard (best performing month,
//! lowest income month, top spending category, month-over-month trend,
//! average transaction size, income vs expense).
//!
//! The computation is pure. Records arrive as an explicit argument, the
//! result is a freshly built [`Insights`] value and no external state is
//! touched, so concurrent calls for different groups or years cannot
//! interfere. Sparse or malformed data never fails the call: each metric
//! degrades to its documented "N/A"/zero sentinel independently of the
//! others.

pub use error::InsightsError;
pub use months::{NOT_AVAILABLE, month_name};
pub use params::InsightsParams;
pub use records::{StoredAmount, TransactionKind, TransactionRecord, UNKNOWN_CATEGORY};
pub use report::{
    AvgTransactionSize, BestPerformingMonth, IncomeVsExpense, Insights, LowestIncomeMonth,
    MonthTrend, TopSpendingCategory, TrendDirection,
};
pub use rollup::{MonthTotals, category_debits, monthly_totals};

mod error;
mod metrics;
mod months;
mod params;
mod records;
mod report;
mod rollup;

type ResultInsights<T> = Result<T, InsightsError>;

/// Computes the six insight metrics for one group, year and reference month.
///
/// The collection may be broader than the request: records of other groups,
/// deleted records and records outside the requested year are ignored, so
/// the aggregates can never leak another group's data.
pub fn financial_insights(params: &InsightsParams, records: &[TransactionRecord]) -> Insights {
    let months = rollup::monthly_totals(params, records);
    let categories = rollup::category_debits(params, records);

    Insights {
        best_performing_month: metrics::best_performing_month(&months),
        lowest_income_month: metrics::lowest_income_month(&months),
        top_spending_category: metrics::top_spending_category(&categories),
        month_trend: metrics::month_trend(params, &months),
        avg_transaction_size: metrics::avg_transaction_size(params, records),
        income_vs_expense: metrics::income_vs_expense(params, &months),
    }
}
