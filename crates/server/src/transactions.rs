//! Transaction ingestion endpoints

use api_types::transaction::{RawAmount, TransactionNew};
use axum::{Json, extract::State, http::StatusCode};
use insights::{StoredAmount, TransactionKind, TransactionRecord};

use crate::{ServerError, server::ServerState};

fn map_amount(amount: RawAmount) -> StoredAmount {
    match amount {
        RawAmount::Number(value) => StoredAmount::Number(value),
        RawAmount::Text(raw) => StoredAmount::Text(raw),
    }
}

/// Handle requests for recording a new transaction
pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<StatusCode, ServerError> {
    if payload.group_id.trim().is_empty() {
        return Err(ServerError::Generic("groupId is required".to_string()));
    }

    let record = TransactionRecord {
        group_id: payload.group_id,
        kind: TransactionKind::from_type_id(payload.type_id),
        amount: map_amount(payload.amount),
        category: payload.category,
        occurred_on: payload.occurred_on,
        deleted: payload.deleted.unwrap_or(false),
    };
    state.store.record(record)?;

    Ok(StatusCode::CREATED)
}
