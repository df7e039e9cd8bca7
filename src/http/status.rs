//! Health and analytics handlers

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::core::TransactionSummary;

/// Liveness response body
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}

/// Query string of `GET /analytics`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsParams {
    /// Restrict the summary to one account
    pub account_id: Option<String>,
}

/// `GET /analytics?account_id=ID`
pub async fn analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> Json<TransactionSummary> {
    Json(TransactionSummary::from_store(
        state.store(),
        params.account_id.as_deref(),
    ))
}
