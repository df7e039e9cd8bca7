//! Transaction resource handlers
//!
//! `/transactions` and `/transactions/:id`. Creation goes through the
//! [`TransactionProcessor`](crate::core::TransactionProcessor); reads go
//! straight to the store.

use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::Json;

use super::error::JsonBody;
use super::AppState;
use crate::types::{LedgerError, StatusUpdate, Transaction, TransactionDraft};

/// `GET /transactions`
pub async fn list_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    Json(state.store().list_transactions())
}

/// `POST /transactions`
///
/// Responds `201` for every accepted draft, including withdrawals recorded
/// as `failed` for insufficient funds.
pub async fn create_transaction(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<TransactionDraft>,
) -> Result<(StatusCode, Json<Transaction>), LedgerError> {
    let transaction = state.processor().process(draft)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// `GET /transactions/:id`
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, LedgerError> {
    state.store().get_transaction(&id).map(Json)
}

/// `PUT /transactions/:id`
///
/// Administrative status override; only `status` is read from the body and
/// no balance is re-derived. The id is looked up before the body is decoded.
pub async fn update_transaction_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<Transaction>, LedgerError> {
    state.store().get_transaction(&id)?;
    let JsonBody(update) = JsonBody::<StatusUpdate>::from_request(request, &state).await?;

    state
        .processor()
        .override_status(&id, update.status)
        .map(Json)
}
