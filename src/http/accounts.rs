//! Account resource handlers
//!
//! `/accounts` and `/accounts/:id`. Each handler is a thin adapter over the
//! [`LedgerStore`](crate::core::LedgerStore) account operations.

use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::Json;
use log::info;

use super::error::JsonBody;
use super::AppState;
use crate::types::{Account, AccountDraft, LedgerError};

/// `GET /accounts`
pub async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    Json(state.store().list_accounts())
}

/// `POST /accounts`
///
/// Any id in the body is ignored; the store assigns the next account id.
pub async fn create_account(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<AccountDraft>,
) -> (StatusCode, Json<Account>) {
    let account = state.store().create_account(draft);
    info!("Created account {} for {}", account.id, account.owner);
    (StatusCode::CREATED, Json(account))
}

/// `GET /accounts/:id`
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Account>, LedgerError> {
    state.store().get_account(&id).map(Json)
}

/// `PUT /accounts/:id`
///
/// Full replacement; the stored id is always the path id. An unknown id is
/// reported as `404` before the body is decoded.
pub async fn replace_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<Account>, LedgerError> {
    state.store().get_account(&id)?;
    let JsonBody(draft) = JsonBody::<AccountDraft>::from_request(request, &state).await?;

    let account = state.store().replace_account(&id, draft)?;
    info!("Replaced account {}", account.id);
    Ok(Json(account))
}

/// `DELETE /accounts/:id`
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, LedgerError> {
    state.store().delete_account(&id)?;
    info!("Deleted account {}", id);
    Ok(StatusCode::NO_CONTENT)
}
