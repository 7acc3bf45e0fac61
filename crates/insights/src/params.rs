//! Validated request parameters for the insights aggregation.

use crate::{InsightsError, ResultInsights};

/// Group, year and reference month an insights request is evaluated for.
///
/// Construction validates the caller input, so a value of this type is
/// always well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightsParams {
    group_id: String,
    year: i32,
    month: u32,
}

impl InsightsParams {
    /// Validates and builds request parameters.
    ///
    /// Fails with [`InsightsError::InvalidRequest`] when the group id is
    /// blank, the year is not a 4-digit number or the month is outside 1–12.
    pub fn new(group_id: &str, year: i32, month: u32) -> ResultInsights<Self> {
        let group_id = group_id.trim();
        if group_id.is_empty() {
            return Err(InsightsError::InvalidRequest(
                "group id is required".to_string(),
            ));
        }
        if !(1000..=9999).contains(&year) {
            return Err(InsightsError::InvalidRequest(format!(
                "year must be a 4-digit number, got {year}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(InsightsError::InvalidRequest(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }

        Ok(Self {
            group_id: group_id.to_string(),
            year,
            month,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The reference month (1–12) for the month-scoped metrics.
    pub fn month(&self) -> u32 {
        self.month
    }
}
