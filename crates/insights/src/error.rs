//! The module contains the error the insights component can return.
//!
//! The errors are:
//!
//! - [`InvalidRequest`] returned when the caller supplies missing or
//!   malformed parameters.
//! - [`DataSourceUnavailable`] returned when the record-retrieval step
//!   upstream of the aggregation failed.
//!
//!  [`InvalidRequest`]: InsightsError::InvalidRequest
//!  [`DataSourceUnavailable`]: InsightsError::DataSourceUnavailable
use thiserror::Error;

/// Insights component errors.
///
/// Numeric degeneracies (empty months, zero denominators, non-numeric stored
/// amounts) are **not** errors: the aggregation absorbs them into the
/// documented "N/A"/zero sentinels and always returns a complete record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsightsError {
    /// Bad caller parameters. Reported immediately, never retried.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The record-retrieval step failed. Transient, safe to retry.
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),
}
