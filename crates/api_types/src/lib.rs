use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod insights {
    use super::*;

    /// Request body for the insights endpoint.
    ///
    /// All fields are optional at the wire level; the server rejects missing
    /// or out-of-range values as an invalid request.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InsightsGet {
        pub group_id: Option<String>,
        /// 4-digit target year.
        pub year: Option<i32>,
        /// Reference month (1–12) for the month-scoped metrics.
        pub month: Option<u32>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum TrendDirection {
        Upward,
        Downward,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BestPerformingMonthView {
        pub month: String,
        pub savings_rate: f64,
        pub amount_saved: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LowestIncomeMonthView {
        pub month: String,
        pub income: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TopSpendingCategoryView {
        pub category: String,
        pub percentage: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MonthTrendView {
        pub trend: TrendDirection,
        pub percentage_change: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AvgTransactionSizeView {
        pub amount: f64,
        pub transaction_count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct IncomeVsExpenseView {
        pub ratio: String,
        pub percentage_higher: f64,
    }

    /// The six derived metrics, always all present.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InsightsResponse {
        pub best_performing_month: BestPerformingMonthView,
        pub lowest_income_month: LowestIncomeMonthView,
        pub top_spending_category: TopSpendingCategoryView,
        pub month_trend: MonthTrendView,
        pub avg_transaction_size: AvgTransactionSizeView,
        pub income_vs_expense: IncomeVsExpenseView,
    }
}

pub mod transaction {
    use super::*;

    /// Amount as it appears in the source data: a number, or legacy text
    /// that may not parse as one.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum RawAmount {
        Number(f64),
        Text(String),
    }

    /// Request body for recording a transaction.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionNew {
        pub group_id: String,
        pub amount: RawAmount,
        /// Legacy kind identifier: 1 is a credit, anything else a debit.
        pub type_id: i64,
        pub category: Option<String>,
        pub occurred_on: NaiveDate,
        pub deleted: Option<bool>,
    }
}
