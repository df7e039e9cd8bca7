//! HTTP mapping for ledger errors
//!
//! Converts [`LedgerError`] into JSON error responses and provides the
//! [`JsonBody`] extractor, which reports every body decoding failure as a
//! `400 Bad Request` carrying a `MalformedBody` error.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

use crate::types::LedgerError;

/// JSON request body extractor
///
/// Behaves like [`axum::Json`], except that missing content types, invalid
/// JSON and missing or mistyped fields all reject with `400`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(LedgerError))]
pub struct JsonBody<T>(pub T);

/// Wire form of an error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl LedgerError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::MalformedBody { .. }
            | LedgerError::UnknownAccount { .. }
            | LedgerError::ArithmeticOverflow { .. } => StatusCode::BAD_REQUEST,
            LedgerError::AccountNotFound { .. } | LedgerError::TransactionNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            LedgerError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        if !self.is_client_error() {
            error!("{}", self);
        }
        let status = self.status_code();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        LedgerError::malformed_body(rejection.body_text())
    }
}
