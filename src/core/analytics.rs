//! Transaction analytics
//!
//! Read-only aggregation over a snapshot of transaction records: counts per
//! status and the completed deposit/withdrawal totals, optionally narrowed to
//! a single account.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ledger_store::LedgerStore;
use crate::types::{Transaction, TransactionStatus, TransactionType};

const NO_TRANSACTIONS: &str = "No transactions found";

/// Aggregate view of a set of transactions
///
/// When nothing matches, only `total_transactions` (zero) and `message` are
/// populated; the counters and totals are omitted from the wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub total_transactions: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,

    /// Sum of completed deposits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deposits: Option<Decimal>,

    /// Sum of completed withdrawals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_withdrawals: Option<Decimal>,

    /// `total_deposits - total_withdrawals`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_flow: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TransactionSummary {
    /// Summarize the given transactions
    ///
    /// # Arguments
    ///
    /// * `transactions` - Records to aggregate
    /// * `account_id` - When set, only records for this account are counted
    pub fn summarize<'a, I>(transactions: I, account_id: Option<&str>) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut total = 0;
        let mut completed = 0;
        let mut pending = 0;
        let mut failed = 0;
        let mut deposits = Decimal::ZERO;
        let mut withdrawals = Decimal::ZERO;

        for tx in transactions
            .into_iter()
            .filter(|tx| account_id.map_or(true, |id| tx.account_id == id))
        {
            total += 1;
            match tx.status {
                TransactionStatus::Completed => {
                    completed += 1;
                    match tx.tx_type {
                        TransactionType::Deposit => deposits = deposits.saturating_add(tx.amount),
                        TransactionType::Withdrawal => {
                            withdrawals = withdrawals.saturating_add(tx.amount)
                        }
                        _ => {}
                    }
                }
                TransactionStatus::Pending => pending += 1,
                TransactionStatus::Failed => failed += 1,
            }
        }

        if total == 0 {
            return TransactionSummary::empty();
        }

        TransactionSummary {
            total_transactions: total,
            completed: Some(completed),
            pending: Some(pending),
            failed: Some(failed),
            total_deposits: Some(deposits),
            total_withdrawals: Some(withdrawals),
            net_flow: Some(deposits.saturating_sub(withdrawals)),
            message: None,
        }
    }

    /// Summarize the current contents of a store under a single read lock
    pub fn from_store(store: &LedgerStore, account_id: Option<&str>) -> Self {
        store.read(|state| Self::summarize(state.transactions(), account_id))
    }

    fn empty() -> Self {
        TransactionSummary {
            total_transactions: 0,
            completed: None,
            pending: None,
            failed: None,
            total_deposits: None,
            total_withdrawals: None,
            net_flow: None,
            message: Some(NO_TRANSACTIONS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(
        id: &str,
        account_id: &str,
        tx_type: TransactionType,
        amount: Decimal,
        status: TransactionStatus,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: account_id.to_string(),
            amount,
            tx_type,
            description: String::new(),
            status,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("5001", "1001", TransactionType::Deposit, dec!(100), TransactionStatus::Completed),
            tx("5002", "1001", TransactionType::Withdrawal, dec!(30), TransactionStatus::Completed),
            tx("5003", "1001", TransactionType::Withdrawal, dec!(500), TransactionStatus::Failed),
            tx("5004", "1002", TransactionType::Deposit, dec!(20.5), TransactionStatus::Completed),
            tx("5005", "1002", TransactionType::Transfer, dec!(5), TransactionStatus::Pending),
        ]
    }

    #[test]
    fn test_summary_over_all_accounts() {
        let transactions = sample();
        let summary = TransactionSummary::summarize(&transactions, None);

        assert_eq!(summary.total_transactions, 5);
        assert_eq!(summary.completed, Some(3));
        assert_eq!(summary.pending, Some(1));
        assert_eq!(summary.failed, Some(1));
        assert_eq!(summary.total_deposits, Some(dec!(120.5)));
        assert_eq!(summary.total_withdrawals, Some(dec!(30)));
        assert_eq!(summary.net_flow, Some(dec!(90.5)));
        assert_eq!(summary.message, None);
    }

    #[test]
    fn test_summary_filtered_by_account() {
        let transactions = sample();
        let summary = TransactionSummary::summarize(&transactions, Some("1002"));

        assert_eq!(summary.total_transactions, 2);
        assert_eq!(summary.completed, Some(1));
        assert_eq!(summary.pending, Some(1));
        assert_eq!(summary.failed, Some(0));
        assert_eq!(summary.net_flow, Some(dec!(20.5)));
    }

    #[test]
    fn test_summary_without_matches() {
        let transactions = sample();
        let summary = TransactionSummary::summarize(&transactions, Some("4242"));

        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.message.as_deref(), Some("No transactions found"));

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"total_transactions": 0, "message": "No transactions found"})
        );
    }
}
