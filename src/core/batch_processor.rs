//! Deferred completion of queued transactions
//!
//! This module provides the `BatchProcessor`, which collects transaction ids
//! submitted for processing and later completes them all in one batch.
//!
//! # Design
//!
//! Queued ids live behind their own lock, separate from the store lock. A
//! batch run takes the whole queue in one step and releases the queue lock
//! before touching the store, so submissions arriving during a run go into
//! the next batch.
//!
//! Completion goes through the administrative status override of the
//! [`TransactionProcessor`]: the record is marked `completed` and no balance
//! is re-derived. Ids are not checked when queued; an id that names no
//! transaction is reported as an error item when the batch runs.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── TransactionProcessor          (status override path)
//!     └── Arc<Mutex<Vec<TransactionId>>> (pending queue)
//! ```

use std::sync::Arc;

use log::{info, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::processor::TransactionProcessor;
use crate::types::{LedgerError, Transaction, TransactionId, TransactionStatus};

const PROCESSED: &str = "Transaction processed";

/// Submission to the processing queue
///
/// Only `id` is read; any other transaction fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueuedTransaction {
    pub id: TransactionId,
}

/// Outcome of one queued transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchItemStatus {
    Success,
    Error,
}

/// Result of processing a single queued transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItemResult {
    /// The queued id
    pub transaction_id: TransactionId,

    pub status: BatchItemStatus,

    /// `Transaction processed`, or the reason the item failed
    pub message: String,
}

impl BatchItemResult {
    fn from_outcome(
        transaction_id: TransactionId,
        outcome: Result<Transaction, LedgerError>,
    ) -> Self {
        match outcome {
            Ok(_) => BatchItemResult {
                transaction_id,
                status: BatchItemStatus::Success,
                message: PROCESSED.to_string(),
            },
            Err(e) => BatchItemResult {
                transaction_id,
                status: BatchItemStatus::Error,
                message: e.to_string(),
            },
        }
    }
}

/// Queue of transactions awaiting batch completion
///
/// Cheap to clone; clones share the queue and the processor's store.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    processor: TransactionProcessor,
    queue: Arc<Mutex<Vec<TransactionId>>>,
}

impl BatchProcessor {
    /// Create an empty queue completing through the given processor
    pub fn new(processor: TransactionProcessor) -> Self {
        BatchProcessor {
            processor,
            queue: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a transaction to the queue
    pub fn enqueue(&self, transaction: QueuedTransaction) {
        info!("Added transaction {} to queue", transaction.id);
        self.queue.lock().push(transaction.id);
    }

    /// Number of ids waiting for the next batch
    pub fn queued(&self) -> usize {
        self.queue.lock().len()
    }

    /// Complete every queued transaction and empty the queue
    ///
    /// # Returns
    ///
    /// One result per queued id, in submission order. An empty queue yields
    /// an empty list.
    pub fn process_batch(&self) -> Vec<BatchItemResult> {
        let batch = std::mem::take(&mut *self.queue.lock());
        if batch.is_empty() {
            info!("No transactions to process");
            return Vec::new();
        }

        batch
            .into_iter()
            .map(|id| {
                let outcome = self
                    .processor
                    .override_status(&id, TransactionStatus::Completed);
                if let Err(e) = &outcome {
                    warn!("Failed to process queued transaction {}: {}", id, e);
                }
                BatchItemResult::from_outcome(id, outcome)
            })
            .collect()
    }
}
