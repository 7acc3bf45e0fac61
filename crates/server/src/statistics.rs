//! Insights API endpoints

use api_types::insights::{
    AvgTransactionSizeView, BestPerformingMonthView, IncomeVsExpenseView, InsightsGet,
    InsightsResponse, LowestIncomeMonthView, MonthTrendView, TopSpendingCategoryView,
    TrendDirection as ApiTrend,
};
use axum::{Json, extract::State};
use insights::{Insights, InsightsError, InsightsParams, TrendDirection, financial_insights};

use crate::{ServerError, server::ServerState};

fn map_trend(direction: TrendDirection) -> ApiTrend {
    match direction {
        TrendDirection::Upward => ApiTrend::Upward,
        TrendDirection::Downward => ApiTrend::Downward,
    }
}

fn map_insights(report: Insights) -> InsightsResponse {
    InsightsResponse {
        best_performing_month: BestPerformingMonthView {
            month: report.best_performing_month.month,
            savings_rate: report.best_performing_month.savings_rate,
            amount_saved: report.best_performing_month.amount_saved,
        },
        lowest_income_month: LowestIncomeMonthView {
            month: report.lowest_income_month.month,
            income: report.lowest_income_month.income,
        },
        top_spending_category: TopSpendingCategoryView {
            category: report.top_spending_category.category,
            percentage: report.top_spending_category.percentage,
        },
        month_trend: MonthTrendView {
            trend: map_trend(report.month_trend.trend),
            percentage_change: report.month_trend.percentage_change,
        },
        avg_transaction_size: AvgTransactionSizeView {
            amount: report.avg_transaction_size.amount,
            transaction_count: report.avg_transaction_size.transaction_count,
        },
        income_vs_expense: IncomeVsExpenseView {
            ratio: report.income_vs_expense.ratio,
            percentage_higher: report.income_vs_expense.percentage_higher,
        },
    }
}

/// Handle requests for group financial insights
pub async fn get_insights(
    State(state): State<ServerState>,
    Json(payload): Json<InsightsGet>,
) -> Result<Json<InsightsResponse>, ServerError> {
    let group_id = payload
        .group_id
        .ok_or_else(|| InsightsError::InvalidRequest("groupId is required".to_string()))?;
    let year = payload
        .year
        .ok_or_else(|| InsightsError::InvalidRequest("year is required".to_string()))?;
    let month = payload
        .month
        .ok_or_else(|| InsightsError::InvalidRequest("month is required".to_string()))?;

    let params = InsightsParams::new(&group_id, year, month)?;
    let records = state
        .store
        .transactions_for(params.group_id(), params.year())?;

    Ok(Json(map_insights(financial_insights(&params, &records))))
}
