use axum::{Json, http::StatusCode, response::IntoResponse};
use insights::InsightsError;

use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};
pub use source::{MemoryStore, TransactionStore};

mod server;
mod source;
mod statistics;
mod transactions;

pub mod types {
    pub mod insights {
        pub use api_types::insights::{InsightsGet, InsightsResponse};
    }

    pub mod transaction {
        pub use api_types::transaction::TransactionNew;
    }
}

pub enum ServerError {
    Insights(InsightsError),
    Generic(String),
}

//TODO: Find a better solution
#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_insights_error(err: &InsightsError) -> StatusCode {
    match err {
        InsightsError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InsightsError::DataSourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn message_for_insights_error(err: InsightsError) -> String {
    match err {
        InsightsError::DataSourceUnavailable(detail) => {
            tracing::error!("data source unavailable: {detail}");
            "data source unavailable, retry later".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Insights(err) => (
                status_for_insights_error(&err),
                message_for_insights_error(err),
            ),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<InsightsError> for ServerError {
    fn from(value: InsightsError) -> Self {
        Self::Insights(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_422() {
        let res =
            ServerError::from(InsightsError::InvalidRequest("bad month".to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn source_unavailable_maps_to_503() {
        let res =
            ServerError::from(InsightsError::DataSourceUnavailable("down".to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
