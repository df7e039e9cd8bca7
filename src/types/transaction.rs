//! Transaction-related types for the ledger service
//!
//! This module defines the transaction record, its type label and status
//! lifecycle, and the drafts accepted from clients when creating a
//! transaction or overriding its status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Transaction identifier
///
/// Assigned by the store from a monotonically increasing counter and
/// rendered as a decimal string on the wire.
pub type TransactionId = String;

/// Transaction type label
///
/// Only deposits and withdrawals affect balances. `transfer` is a
/// recognised label without any processing of its own, and any other label
/// sent by a client is kept verbatim so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// Credit the amount to the referenced account
    Deposit,

    /// Debit the amount from the referenced account when funds allow
    Withdrawal,

    /// Accepted as a label; no balance mutation
    Transfer,

    /// Any unrecognised label
    Other(String),
}

impl TransactionType {
    /// Wire representation of this type
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
            TransactionType::Other(label) => label,
        }
    }
}

impl From<String> for TransactionType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "deposit" => TransactionType::Deposit,
            "withdrawal" => TransactionType::Withdrawal,
            "transfer" => TransactionType::Transfer,
            _ => TransactionType::Other(label),
        }
    }
}

impl From<TransactionType> for String {
    fn from(tx_type: TransactionType) -> Self {
        match tx_type {
            TransactionType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Lifecycle state of a transaction
///
/// Every transaction is created `Pending`. Deposits and withdrawals are
/// finalized to `Completed` or `Failed` within the same critical section
/// that creates them; other types stay pending until an administrative
/// override changes the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Recorded but not (yet) applied
    Pending,

    /// Applied to the account balance
    Completed,

    /// Rejected by a business rule (insufficient funds)
    Failed,
}

/// Stored transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// The account this transaction was submitted against
    ///
    /// Validated only when the transaction is created. Deleting the account
    /// later leaves this record in place.
    pub account_id: AccountId,

    pub amount: Decimal,

    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    pub description: String,

    pub status: TransactionStatus,
}

/// Client-supplied transaction body
///
/// `id` and `status` may be present in the request body but are always
/// overwritten by the processor, so they are not decoded at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionDraft {
    pub account_id: AccountId,

    pub amount: Decimal,

    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Free text, empty when omitted or `null`
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
}

/// Body of an administrative status override
///
/// Only `status` is honoured; every other field in the body is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatusUpdate {
    pub status: TransactionStatus,
}
