//! Ledger Service Library
//! # Overview
//!
//! This library provides a minimal ledger exposing account and transaction
//! resources over HTTP, backed by volatile in-memory storage.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, LedgerError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::ledger_store`] - Lock-guarded account/transaction storage and id counters
//!   - [`core::processor`] - Transaction status decision and balance mutation
//!   - [`core::analytics`] - Transaction summaries
//!   - [`core::batch_processor`] - Queue of transactions completed in batches
//! - [`http`] - Route registration and request handlers
//! - [`cli`] - Command-line and environment configuration
//! - [`server`] - Listener lifecycle
//!
//! # Transaction Types
//!
//! - **Deposit**: Credit the amount to the account; always completes
//! - **Withdrawal**: Debit the amount when the balance covers it; otherwise
//!   recorded as failed with the balance unchanged
//! - **Transfer** and any other label: recorded as pending, no balance effect
//!
//! # Transaction Status
//!
//! Every transaction starts `pending` and is finalized to `completed` or
//! `failed` in the same atomic step that creates it. A status can later be
//! overridden administratively; such overrides never touch balances.

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod server;
pub mod types;

pub use crate::core::{BatchProcessor, LedgerStore, TransactionProcessor, TransactionSummary};
pub use crate::http::{router, AppState};
pub use types::{
    Account, AccountDraft, AccountId, LedgerError, StatusUpdate, Transaction, TransactionDraft,
    TransactionId, TransactionStatus, TransactionType,
};
