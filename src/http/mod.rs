//! HTTP boundary
//!
//! Route registration and request/response adapters. Handlers translate HTTP
//! verbs into [`LedgerStore`] and [`TransactionProcessor`] calls and never
//! hold the store lock across an `.await`.
//!
//! | Method | Path                 | Handler                                   |
//! |--------|----------------------|-------------------------------------------|
//! | GET    | `/accounts`          | [`accounts::list_accounts`]               |
//! | POST   | `/accounts`          | [`accounts::create_account`]              |
//! | GET    | `/accounts/:id`      | [`accounts::get_account`]                 |
//! | PUT    | `/accounts/:id`      | [`accounts::replace_account`]             |
//! | DELETE | `/accounts/:id`      | [`accounts::delete_account`]              |
//! | GET    | `/transactions`      | [`transactions::list_transactions`]       |
//! | POST   | `/transactions`      | [`transactions::create_transaction`]      |
//! | GET    | `/transactions/:id`  | [`transactions::get_transaction`]         |
//! | PUT    | `/transactions/:id`  | [`transactions::update_transaction_status`] |
//! | GET    | `/health`            | [`status::health`]                        |
//! | GET    | `/analytics`         | [`status::analytics`]                     |
//! | POST   | `/process`           | [`queue::enqueue_transaction`]            |
//! | POST   | `/process/batch`     | [`queue::process_batch`]                  |
//!
//! Any other method on these paths is answered with `405 Method Not Allowed`.

pub mod accounts;
pub mod error;
pub mod queue;
pub mod status;
pub mod transactions;

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::debug;

use crate::core::{BatchProcessor, LedgerStore, TransactionProcessor};

pub use error::JsonBody;

/// Shared handler state
///
/// Holds the processor, which in turn holds the store handle, and the
/// processing queue; cloning is a reference-count bump.
#[derive(Debug, Clone)]
pub struct AppState {
    processor: TransactionProcessor,
    batch: BatchProcessor,
}

impl AppState {
    /// Build handler state around an existing store
    pub fn new(store: Arc<LedgerStore>) -> Self {
        let processor = TransactionProcessor::new(store);
        AppState {
            batch: BatchProcessor::new(processor.clone()),
            processor,
        }
    }

    /// Store shared by every handler
    pub fn store(&self) -> &LedgerStore {
        self.processor.store()
    }

    /// Processor used for transaction creation and status overrides
    pub fn processor(&self) -> &TransactionProcessor {
        &self.processor
    }

    /// Queue of transactions awaiting batch completion
    pub fn batch(&self) -> &BatchProcessor {
        &self.batch
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/accounts/:id",
            get(accounts::get_account)
                .put(accounts::replace_account)
                .delete(accounts::delete_account),
        )
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/transactions/:id",
            get(transactions::get_transaction).put(transactions::update_transaction_status),
        )
        .route("/health", get(status::health))
        .route("/analytics", get(status::analytics))
        .route("/process", post(queue::enqueue_transaction))
        .route("/process/batch", post(queue::process_batch))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    debug!("{} {} -> {}", method, path, response.status().as_u16());
    response
}
