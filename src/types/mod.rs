//! Types module
//!
//! Contains core data structures used throughout the service.
//! This module organizes types into logical submodules:
//! - `account`: Account record and draft
//! - `transaction`: Transaction record, type label, status and drafts
//! - `error`: Error types for the ledger service

pub mod account;
pub mod error;
pub mod transaction;

use serde::{Deserialize, Deserializer};

/// Decode an optional string field, treating `null` like an absent field
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub use account::{Account, AccountDraft, AccountId};
pub use error::LedgerError;
pub use transaction::{
    StatusUpdate, Transaction, TransactionDraft, TransactionId, TransactionStatus,
    TransactionType,
};
