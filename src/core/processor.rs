//! Transaction processing
//!
//! This module provides the `TransactionProcessor`, which turns a submitted
//! transaction draft into a finalized ledger entry and applies its balance
//! effect against the [`LedgerStore`].
//!
//! The processor enforces the following rules:
//! - The referenced account must exist when the transaction is submitted
//! - Deposits are always applied and complete
//! - Withdrawals complete only when the balance covers the amount; otherwise
//!   they are recorded as failed and the balance is left untouched
//! - Every other type (including `transfer`) is recorded as pending with no
//!   balance effect
//!
//! Validation, balance update and record creation all happen inside one
//! exclusive section of the store, so concurrent submissions against the same
//! account are applied one at a time and a reader never sees a finalized
//! record without its balance effect.

use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::core::ledger_store::LedgerStore;
use crate::types::{
    Account, LedgerError, Transaction, TransactionDraft, TransactionStatus, TransactionType,
};

/// Transaction processing orchestrator
///
/// Cheap to clone; every clone shares the same store handle, so it can be
/// handed to each request task.
#[derive(Debug, Clone)]
pub struct TransactionProcessor {
    store: Arc<LedgerStore>,
}

impl TransactionProcessor {
    /// Create a processor operating on the given store
    pub fn new(store: Arc<LedgerStore>) -> Self {
        TransactionProcessor { store }
    }

    /// The store this processor writes to
    pub fn store(&self) -> &Arc<LedgerStore> {
        &self.store
    }

    /// Process a transaction draft
    ///
    /// Validates the referenced account, assigns the next transaction id,
    /// decides the final status and applies any balance delta, all as a single
    /// atomic unit.
    ///
    /// # Arguments
    ///
    /// * `draft` - The client-supplied transaction
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The stored record, with status `completed`,
    ///   `failed` or `pending`
    /// * `Err(LedgerError)` - If the draft was rejected; nothing was stored
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The referenced account does not exist (`UnknownAccount`)
    /// - The balance update would overflow (`ArithmeticOverflow`)
    pub fn process(&self, draft: TransactionDraft) -> Result<Transaction, LedgerError> {
        let result = self.store.update(|state| -> Result<Transaction, LedgerError> {
            let account = state
                .account_mut(&draft.account_id)
                .ok_or_else(|| LedgerError::unknown_account(&draft.account_id))?;

            let status = match draft.tx_type {
                TransactionType::Deposit => apply_deposit(account, draft.amount)?,
                TransactionType::Withdrawal => apply_withdrawal(account, draft.amount)?,
                _ => TransactionStatus::Pending,
            };

            Ok(state.create_transaction_record(draft, status))
        });

        match &result {
            Ok(tx) => debug!(
                "Transaction {} ({} {}) on account {}: {:?}",
                tx.id,
                tx.tx_type.as_str(),
                tx.amount,
                tx.account_id,
                tx.status
            ),
            Err(e) => warn!("Rejected transaction: {}", e),
        }

        result
    }

    /// Override the status of a stored transaction
    ///
    /// An administrative correction path. The balance of the referenced
    /// account is not re-derived, so the account can drift from its
    /// transaction history after an override.
    pub fn override_status(
        &self,
        id: &str,
        status: TransactionStatus,
    ) -> Result<Transaction, LedgerError> {
        let tx = self.store.set_transaction_status(id, status)?;
        warn!(
            "Status of transaction {} overridden to {:?}; balance of account {} not re-derived",
            tx.id, tx.status, tx.account_id
        );
        Ok(tx)
    }
}

/// Credit a deposit to the account
///
/// Always completes unless the new balance would not fit in a `Decimal`.
fn apply_deposit(account: &mut Account, amount: Decimal) -> Result<TransactionStatus, LedgerError> {
    account.balance = account
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &account.id))?;
    Ok(TransactionStatus::Completed)
}

/// Debit a withdrawal from the account when the balance covers it
///
/// An uncovered withdrawal is not an error: it yields `Failed` and leaves the
/// balance unchanged.
fn apply_withdrawal(
    account: &mut Account,
    amount: Decimal,
) -> Result<TransactionStatus, LedgerError> {
    if account.balance < amount {
        return Ok(TransactionStatus::Failed);
    }

    account.balance = account
        .balance
        .checked_sub(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &account.id))?;
    Ok(TransactionStatus::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountDraft;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::thread;

    fn setup(balance: Decimal) -> (TransactionProcessor, String) {
        let store = Arc::new(LedgerStore::new());
        let account = store.create_account(AccountDraft::new("Alice", balance));
        (TransactionProcessor::new(store), account.id)
    }

    fn draft(account_id: &str, tx_type: TransactionType, amount: Decimal) -> TransactionDraft {
        TransactionDraft {
            account_id: account_id.to_string(),
            amount,
            tx_type,
            description: "test".to_string(),
        }
    }

    #[rstest]
    #[case::from_zero(dec!(0), dec!(100), dec!(100))]
    #[case::fractional(dec!(0.10), dec!(0.20), dec!(0.30))]
    #[case::zero_amount(dec!(5), dec!(0), dec!(5))]
    #[case::negative_balance(dec!(-20), dec!(15), dec!(-5))]
    fn test_deposit_increases_balance_exactly(
        #[case] opening: Decimal,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        let (processor, account_id) = setup(opening);

        let tx = processor
            .process(draft(&account_id, TransactionType::Deposit, amount))
            .unwrap();

        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.amount, amount);
        assert_eq!(
            processor.store().get_account(&account_id).unwrap().balance,
            expected
        );
    }

    #[rstest]
    #[case::partial(dec!(100), dec!(40), TransactionStatus::Completed, dec!(60))]
    #[case::exact(dec!(100), dec!(100), TransactionStatus::Completed, dec!(0))]
    #[case::overdraw(dec!(100), dec!(150), TransactionStatus::Failed, dec!(100))]
    #[case::smallest_overdraw(dec!(1.00), dec!(1.01), TransactionStatus::Failed, dec!(1.00))]
    #[case::empty_account(dec!(0), dec!(0.01), TransactionStatus::Failed, dec!(0))]
    fn test_withdrawal_never_overdraws(
        #[case] opening: Decimal,
        #[case] amount: Decimal,
        #[case] expected_status: TransactionStatus,
        #[case] expected_balance: Decimal,
    ) {
        let (processor, account_id) = setup(opening);

        let tx = processor
            .process(draft(&account_id, TransactionType::Withdrawal, amount))
            .unwrap();

        assert_eq!(tx.status, expected_status);
        assert_eq!(
            processor.store().get_account(&account_id).unwrap().balance,
            expected_balance
        );
    }

    #[rstest]
    #[case::transfer(TransactionType::Transfer)]
    #[case::unknown_label(TransactionType::Other("refund".to_string()))]
    fn test_other_types_stay_pending(#[case] tx_type: TransactionType) {
        let (processor, account_id) = setup(dec!(50));

        let tx = processor
            .process(draft(&account_id, tx_type.clone(), dec!(20)))
            .unwrap();

        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.tx_type, tx_type);
        assert_eq!(
            processor.store().get_account(&account_id).unwrap().balance,
            dec!(50)
        );
    }

    #[test]
    fn test_unknown_account_changes_nothing() {
        let (processor, _) = setup(dec!(0));

        let result = processor.process(draft("999", TransactionType::Deposit, dec!(10)));

        assert_eq!(result, Err(LedgerError::unknown_account("999")));
        assert!(processor.store().list_transactions().is_empty());

        // The rejected draft did not consume an id
        let tx = processor
            .process(draft("1001", TransactionType::Deposit, dec!(1)))
            .unwrap();
        assert_eq!(tx.id, "5001");
    }

    #[test]
    fn test_overflowing_deposit_is_rejected_without_side_effects() {
        let (processor, account_id) = setup(Decimal::MAX);

        let result = processor.process(draft(&account_id, TransactionType::Deposit, dec!(1)));

        assert!(matches!(
            result,
            Err(LedgerError::ArithmeticOverflow { .. })
        ));
        assert_eq!(
            processor.store().get_account(&account_id).unwrap().balance,
            Decimal::MAX
        );
        assert!(processor.store().list_transactions().is_empty());
    }

    #[test]
    fn test_transaction_ids_increase_monotonically() {
        let (processor, account_id) = setup(dec!(0));

        let ids: Vec<String> = (0..5)
            .map(|_| {
                processor
                    .process(draft(&account_id, TransactionType::Deposit, dec!(1)))
                    .unwrap()
                    .id
            })
            .collect();

        assert_eq!(ids, vec!["5001", "5002", "5003", "5004", "5005"]);
    }

    #[test]
    fn test_example_scenario() {
        let store = Arc::new(LedgerStore::new());
        let processor = TransactionProcessor::new(Arc::clone(&store));
        let alice = store.create_account(AccountDraft::new("Alice", dec!(0)));
        assert_eq!(alice.id, "1001");

        let deposit = processor
            .process(draft("1001", TransactionType::Deposit, dec!(100)))
            .unwrap();
        assert_eq!(deposit.id, "5001");
        assert_eq!(deposit.status, TransactionStatus::Completed);
        assert_eq!(store.get_account("1001").unwrap().balance, dec!(100));

        let withdrawal = processor
            .process(draft("1001", TransactionType::Withdrawal, dec!(150)))
            .unwrap();
        assert_eq!(withdrawal.status, TransactionStatus::Failed);
        assert_eq!(store.get_account("1001").unwrap().balance, dec!(100));
    }

    #[test]
    fn test_override_status_keeps_balance() {
        let (processor, account_id) = setup(dec!(0));
        let pending = processor
            .process(draft(&account_id, TransactionType::Transfer, dec!(25)))
            .unwrap();

        let overridden = processor
            .override_status(&pending.id, TransactionStatus::Completed)
            .unwrap();

        assert_eq!(overridden.status, TransactionStatus::Completed);
        assert_eq!(
            processor.store().get_account(&account_id).unwrap().balance,
            dec!(0)
        );
    }

    #[test]
    fn test_concurrent_withdrawals_never_overdraw() {
        let (processor, account_id) = setup(dec!(100));

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let processor = processor.clone();
                let account_id = account_id.clone();
                thread::spawn(move || {
                    processor
                        .process(draft(&account_id, TransactionType::Withdrawal, dec!(10)))
                        .unwrap()
                        .status
                })
            })
            .collect();

        let statuses: Vec<TransactionStatus> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        let completed = statuses
            .iter()
            .filter(|s| **s == TransactionStatus::Completed)
            .count();
        assert_eq!(completed, 10);
        assert_eq!(statuses.len() - completed, 40);
        assert_eq!(
            processor.store().get_account(&account_id).unwrap().balance,
            dec!(0)
        );
    }

    #[test]
    fn test_readers_never_observe_torn_state() {
        let (processor, account_id) = setup(dec!(0));

        let writers: Vec<_> = (0..4)
            .map(|worker| {
                let processor = processor.clone();
                let account_id = account_id.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let tx_type = if (worker + i) % 3 == 0 {
                            TransactionType::Withdrawal
                        } else {
                            TransactionType::Deposit
                        };
                        processor
                            .process(draft(&account_id, tx_type, dec!(7)))
                            .unwrap();
                    }
                })
            })
            .collect();

        // Balance must always equal completed deposits minus completed
        // withdrawals when both are read under the same lock.
        for _ in 0..200 {
            let (balance, derived) = processor.store().read(|state| {
                let balance = state.account(&account_id).map(|a| a.balance);
                let derived = state
                    .transactions()
                    .filter(|tx| tx.status == TransactionStatus::Completed)
                    .fold(Decimal::ZERO, |acc, tx| match tx.tx_type {
                        TransactionType::Deposit => acc + tx.amount,
                        TransactionType::Withdrawal => acc - tx.amount,
                        _ => acc,
                    });
                (balance, derived)
            });
            assert_eq!(balance, Some(derived));
        }

        for writer in writers {
            writer.join().unwrap();
        }
        assert_eq!(processor.store().list_transactions().len(), 800);
    }
}
