//! Ledger entries displayed in the transaction sheet.

use serde::{Deserialize, Serialize};

// ============================================================================
// Transaction Category
// ============================================================================

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// In-store purchase.
    Shopping,
    /// Online purchase.
    Internet,
    /// Incoming payment.
    Payment,
    /// Transfer between accounts.
    Transfer,
}

// ============================================================================
// Transaction
// ============================================================================

/// A single historical ledger entry.
///
/// Amounts are signed minor currency units: negative for debits, positive for
/// credits. The `icon` is an enum-like key resolved at render time; unknown
/// keys fall back to a default icon instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier, expected to be unique within a dataset.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display date, already localized.
    pub date: String,
    /// Display time, already localized.
    pub time: String,
    /// Signed amount in minor currency units.
    pub amount: i64,
    /// Entry kind. Accepts `type` as written by the web client's data files.
    #[serde(alias = "type")]
    pub category: TransactionCategory,
    /// Icon key such as `shopping_cart`, `public` or `receipt`.
    pub icon: String,
}

impl Transaction {
    /// Returns `true` for entries that add money to the account.
    ///
    /// Zero is neither credit nor debit for styling purposes.
    #[must_use]
    pub const fn is_credit(&self) -> bool {
        self.amount > 0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransactionMother;

    #[test]
    fn test_credit_follows_sign() {
        assert!(TransactionMother::credit("1", 3_500_000).is_credit());
        assert!(!TransactionMother::debit("2", -600_000).is_credit());
        assert!(!TransactionMother::credit("3", 0).is_credit());
    }

    #[test]
    fn test_deserialize_accepts_type_alias() {
        let json = r#"{
            "id": "7",
            "title": "انتقال",
            "date": "۲۰ آبان ۱۴۰۴",
            "time": "۱۰:۰۰",
            "amount": -250000,
            "type": "transfer",
            "icon": "sync_alt"
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.category, TransactionCategory::Transfer);
        assert_eq!(txn.amount, -250_000);
        assert_eq!(txn.icon, "sync_alt");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{"id":"1","title":"x","date":"d","time":"t","amount":1,"category":"crypto","icon":"receipt"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
