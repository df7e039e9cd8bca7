//! Error types for the ledger service
//!
//! This module defines all error types that can surface from the ledger
//! store, the transaction processor and the HTTP boundary.
//!
//! # Error Categories
//!
//! - **Malformed input**: the request body could not be decoded
//! - **Not found**: an unknown account or transaction id in the path
//! - **Validation**: a transaction referencing an account that does not exist
//! - **Arithmetic**: a balance update that would overflow the decimal range
//! - **I/O**: listener and startup failures
//!
//! Insufficient funds is deliberately absent: a withdrawal that cannot be
//! covered is recorded as a `failed` transaction, not reported as an error.

use thiserror::Error;

/// Main error type for the ledger service
///
/// Every variant except `Io` is local to a single request and leaves the
/// store untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The request body could not be decoded
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Decoder message
        message: String,
    },

    /// No account is stored under the requested id
    #[error("Account not found: {id}")]
    AccountNotFound {
        /// The requested account id
        id: String,
    },

    /// No transaction is stored under the requested id
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The requested transaction id
        id: String,
    },

    /// A transaction draft references an account that does not exist
    ///
    /// Reported as a client error; no transaction record is created and no
    /// transaction id is consumed.
    #[error("Account {account_id} does not exist")]
    UnknownAccount {
        /// The account id named by the draft
        account_id: String,
    },

    /// Applying the amount would overflow the balance
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        account: String,
    },

    /// I/O error while binding or serving
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a MalformedBody error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        LedgerError::MalformedBody {
            message: message.into(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: &str) -> Self {
        LedgerError::TransactionNotFound { id: id.to_string() }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(account_id: &str) -> Self {
        LedgerError::UnknownAccount {
            account_id: account_id.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Whether the error was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LedgerError::Io { .. })
    }
}
