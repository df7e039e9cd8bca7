//! Core business logic module
//!
//! This module contains the ledger components:
//! - `ledger_store` - Lock-guarded storage for accounts, transactions and id counters
//! - `processor` - Transaction validation, status decision and balance mutation
//! - `analytics` - Read-only transaction summaries
//! - `batch_processor` - Queue of transactions completed together in batches

pub mod analytics;
pub mod batch_processor;
pub mod ledger_store;
pub mod processor;

pub use analytics::TransactionSummary;
pub use batch_processor::{BatchItemResult, BatchItemStatus, BatchProcessor, QueuedTransaction};
pub use ledger_store::{LedgerState, LedgerStore};
pub use processor::TransactionProcessor;
