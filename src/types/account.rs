//! Account-related types for the ledger service
//!
//! This module defines the Account record and the draft a client submits
//! when creating or replacing one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned by the store from a monotonically increasing counter and never
/// reused within a process lifetime.
pub type AccountId = String;

/// Account record
///
/// Represents the stored state of an account. The balance is maintained
/// incrementally by the transaction processor and is not recomputed from
/// transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier
    pub id: AccountId,

    /// Opaque owner name
    pub owner: String,

    /// Current balance
    ///
    /// Signed; a full replacement may set it to any value, including a
    /// negative one.
    pub balance: Decimal,
}

impl Account {
    /// Build a stored account from a draft and the identifier it is stored under
    pub fn from_draft(id: AccountId, draft: AccountDraft) -> Self {
        Account {
            id,
            owner: draft.owner,
            balance: draft.balance,
        }
    }
}

/// Client-supplied account body
///
/// Any `id` in the request body is ignored: the store assigns one on
/// creation and the path decides it on replacement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountDraft {
    /// Owner name, empty when omitted or `null`
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub owner: String,

    /// Opening balance, zero when omitted
    #[serde(default)]
    pub balance: Decimal,
}

impl AccountDraft {
    /// Create a draft for the given owner and opening balance
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        AccountDraft {
            owner: owner.into(),
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_draft_balance_defaults_to_zero() {
        let draft: AccountDraft = serde_json::from_str(r#"{"owner":"Alice"}"#).unwrap();
        assert_eq!(draft.owner, "Alice");
        assert_eq!(draft.balance, Decimal::ZERO);
    }

    #[test]
    fn test_draft_ignores_client_id() {
        let draft: AccountDraft =
            serde_json::from_str(r#"{"id":"42","owner":"Bob","balance":10.25}"#).unwrap();
        let account = Account::from_draft("1001".to_string(), draft);

        assert_eq!(account.id, "1001");
        assert_eq!(account.owner, "Bob");
        assert_eq!(account.balance, dec!(10.25));
    }

    #[rstest]
    #[case::missing(r#"{"balance":1}"#)]
    #[case::null(r#"{"owner":null,"balance":1}"#)]
    fn test_draft_owner_defaults_to_empty(#[case] body: &str) {
        let draft: AccountDraft = serde_json::from_str(body).unwrap();
        assert_eq!(draft.owner, "");
        assert_eq!(draft.balance, dec!(1));
    }

    #[test]
    fn test_draft_rejects_non_string_owner() {
        assert!(serde_json::from_str::<AccountDraft>(r#"{"owner":7}"#).is_err());
    }

    #[test]
    fn test_account_wire_names() {
        let account = Account {
            id: "1001".to_string(),
            owner: "Alice".to_string(),
            balance: dec!(100),
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["id"], "1001");
        assert_eq!(value["owner"], "Alice");
        assert_eq!(value["balance"].as_f64(), Some(100.0));
    }
}
