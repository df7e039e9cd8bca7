//! Processing queue handlers
//!
//! `/process` queues a transaction id; `/process/batch` completes everything
//! queued so far through the [`BatchProcessor`](crate::core::BatchProcessor).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::error::JsonBody;
use super::AppState;
use crate::core::{BatchItemResult, QueuedTransaction};
use crate::types::TransactionId;

/// Acknowledgement of a queued transaction
#[derive(Debug, Serialize)]
pub struct QueueReceipt {
    pub status: &'static str,
    pub transaction_id: TransactionId,
}

/// Per-item results of one batch run
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub results: Vec<BatchItemResult>,
}

/// `POST /process`
///
/// Responds `202`; the id is only checked when the batch runs.
pub async fn enqueue_transaction(
    State(state): State<AppState>,
    JsonBody(transaction): JsonBody<QueuedTransaction>,
) -> (StatusCode, Json<QueueReceipt>) {
    let transaction_id = transaction.id.clone();
    state.batch().enqueue(transaction);
    (
        StatusCode::ACCEPTED,
        Json(QueueReceipt {
            status: "queued",
            transaction_id,
        }),
    )
}

/// `POST /process/batch`
pub async fn process_batch(State(state): State<AppState>) -> Json<BatchReport> {
    Json(BatchReport {
        results: state.batch().process_batch(),
    })
}
