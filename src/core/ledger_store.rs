//! In-memory ledger storage
//!
//! This module provides the `LedgerStore`, the single source of truth for
//! every account and transaction record and for the two identifier counters.
//!
//! # Concurrency
//!
//! All state lives behind one reader/writer lock:
//! - Read operations (list/get) take the shared lock and return owned
//!   snapshots, so callers never hold the lock while serializing responses.
//! - Write operations take the exclusive lock and are mutually exclusive with
//!   every other read or write.
//! - Compound operations run inside [`LedgerStore::update`], which hands the
//!   closure exclusive access to the whole [`LedgerState`] for its duration.
//!
//! The lock is never held across I/O or an `.await`, so hold times are bounded
//! by in-memory map operations.
//!
//! # Identifiers
//!
//! Accounts and transactions draw from independent counters. Ids are never
//! reused within a process lifetime, including after deletion.

use crate::types::{
    Account, AccountDraft, AccountId, LedgerError, Transaction, TransactionDraft, TransactionId,
    TransactionStatus,
};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Last reserved account id; the first account created is `1001`
pub const ACCOUNT_ID_FLOOR: u64 = 1000;

/// Last reserved transaction id; the first transaction created is `5001`
pub const TRANSACTION_ID_FLOOR: u64 = 5000;

/// The data guarded by the store's lock
///
/// Only reachable through a [`LedgerStore`] guard, either read-only via
/// [`LedgerStore::read`] or exclusively via [`LedgerStore::update`].
#[derive(Debug)]
pub struct LedgerState {
    accounts: HashMap<AccountId, Account>,
    transactions: HashMap<TransactionId, Transaction>,
    last_account_id: u64,
    last_transaction_id: u64,
}

impl LedgerState {
    fn new() -> Self {
        LedgerState {
            accounts: HashMap::new(),
            transactions: HashMap::new(),
            last_account_id: ACCOUNT_ID_FLOOR,
            last_transaction_id: TRANSACTION_ID_FLOOR,
        }
    }

    /// Look up an account
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Look up an account for modification
    pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Look up a transaction
    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    /// Iterate over every stored transaction in arbitrary order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    /// Store a new account under the next account id
    pub fn insert_account(&mut self, draft: AccountDraft) -> Account {
        self.last_account_id += 1;
        let account = Account::from_draft(self.last_account_id.to_string(), draft);
        self.accounts.insert(account.id.clone(), account.clone());
        account
    }

    /// Store a new transaction record under the next transaction id
    ///
    /// The record is inserted exactly as given; validating the referenced
    /// account and applying any balance effect is the caller's job and must
    /// happen within the same exclusive section.
    pub fn create_transaction_record(
        &mut self,
        draft: TransactionDraft,
        status: TransactionStatus,
    ) -> Transaction {
        self.last_transaction_id += 1;
        let transaction = Transaction {
            id: self.last_transaction_id.to_string(),
            account_id: draft.account_id,
            amount: draft.amount,
            tx_type: draft.tx_type,
            description: draft.description,
            status,
        };
        self.transactions
            .insert(transaction.id.clone(), transaction.clone());
        transaction
    }
}

/// Thread-safe in-memory store for accounts and transactions
///
/// Constructed once at startup and shared by handle (`Arc<LedgerStore>`);
/// tests build their own instance for isolation.
#[derive(Debug)]
pub struct LedgerStore {
    state: RwLock<LedgerState>,
}

impl LedgerStore {
    /// Create an empty store with both counters at their floor
    pub fn new() -> Self {
        LedgerStore {
            state: RwLock::new(LedgerState::new()),
        }
    }

    /// Run a closure with shared access to the ledger state
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&LedgerState) -> T,
    {
        let state = self.state.read();
        f(&*state)
    }

    /// Run a closure with exclusive access to the ledger state
    ///
    /// Everything the closure does is observed by other callers either
    /// entirely before or entirely after it. The closure must not fail after
    /// it has started mutating, since nothing is rolled back.
    ///
    /// # Arguments
    ///
    /// * `f` - A closure receiving a mutable reference to the ledger state
    ///
    /// # Returns
    ///
    /// Whatever the closure returns
    pub fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut LedgerState) -> T,
    {
        let mut state = self.state.write();
        f(&mut *state)
    }

    /// Snapshot of every account, ordered by id
    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> =
            self.read(|state| state.accounts.values().cloned().collect());
        accounts.sort_by(|a, b| id_order(&a.id, &b.id));
        accounts
    }

    /// Get a copy of a single account
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - If the account exists
    /// * `Err(LedgerError::AccountNotFound)` - If no account has this id
    pub fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        self.read(|state| state.account(id).cloned())
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Create an account from a draft, assigning the next account id
    pub fn create_account(&self, draft: AccountDraft) -> Account {
        self.update(|state| state.insert_account(draft))
    }

    /// Replace an existing account entirely, keeping only its id
    ///
    /// # Arguments
    ///
    /// * `id` - The path id; the stored record always carries this id
    /// * `draft` - The new owner and balance
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The record as stored after replacement
    /// * `Err(LedgerError::AccountNotFound)` - If no account has this id
    pub fn replace_account(&self, id: &str, draft: AccountDraft) -> Result<Account, LedgerError> {
        self.update(|state| -> Result<Account, LedgerError> {
            let account = state
                .account_mut(id)
                .ok_or_else(|| LedgerError::account_not_found(id))?;
            *account = Account::from_draft(id.to_string(), draft);
            Ok(account.clone())
        })
    }

    /// Remove an account
    ///
    /// Transactions referencing the account are left in place.
    pub fn delete_account(&self, id: &str) -> Result<(), LedgerError> {
        self.update(|state| {
            state
                .accounts
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| LedgerError::account_not_found(id))
        })
    }

    /// Snapshot of every transaction, ordered by id
    pub fn list_transactions(&self) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> =
            self.read(|state| state.transactions().cloned().collect());
        transactions.sort_by(|a, b| id_order(&a.id, &b.id));
        transactions
    }

    /// Get a copy of a single transaction
    pub fn get_transaction(&self, id: &str) -> Result<Transaction, LedgerError> {
        self.read(|state| state.transaction(id).cloned())
            .ok_or_else(|| LedgerError::transaction_not_found(id))
    }

    /// Overwrite the status of a stored transaction
    ///
    /// This is an administrative correction: the referenced account's balance
    /// is not re-derived, so marking a pending deposit `completed` here does
    /// not credit the account.
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The record with its new status
    /// * `Err(LedgerError::TransactionNotFound)` - If no transaction has this id
    pub fn set_transaction_status(
        &self,
        id: &str,
        status: TransactionStatus,
    ) -> Result<Transaction, LedgerError> {
        self.update(|state| -> Result<Transaction, LedgerError> {
            let transaction = state
                .transactions
                .get_mut(id)
                .ok_or_else(|| LedgerError::transaction_not_found(id))?;
            transaction.status = status;
            Ok(transaction.clone())
        })
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric ordering for counter-assigned ids without parsing them
fn id_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
