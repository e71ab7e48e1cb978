//! Entity and statistics types exchanged with the banking backend
//!
//! Accounts and transactions are owned and mutated by the external GraphQL
//! backend; this crate only holds transient, read-only copies of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of an account, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    Current,
    Savings,
}

impl AccountKind {
    /// Enum value the backend expects in variables.
    pub fn as_wire(&self) -> &'static str {
        match self {
            AccountKind::Current => "CURRENT",
            AccountKind::Savings => "SAVINGS",
        }
    }

    /// Label shown in the interface.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Current => "Courant",
            AccountKind::Savings => "Épargne",
        }
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CURRENT" => Ok(AccountKind::Current),
            "SAVINGS" => Ok(AccountKind::Savings),
            other => Err(format!("unknown account kind: {other}")),
        }
    }
}

/// Direction of a transaction, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Dépôt",
            TransactionKind::Withdrawal => "Retrait",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DEPOSIT" => Ok(TransactionKind::Deposit),
            "WITHDRAWAL" => Ok(TransactionKind::Withdrawal),
            other => Err(format!("unknown transaction kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub balance: f64,
    pub kind: AccountKind,
    pub created_at: NaiveDate,
}

/// A deposit or withdrawal. The embedded account is a by-value snapshot
/// whose balance already reflects this transaction, as of the fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub created_at: NaiveDate,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceStats {
    pub count: i64,
    pub sum: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub count: i64,
    pub sum_deposits: f64,
    pub sum_withdrawals: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_decodes_wire_shape() {
        let json = r#"{
            "id": "1",
            "balance": 1500.50,
            "kind": "CURRENT",
            "createdAt": "2025-01-15"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, "1");
        assert_eq!(account.balance, 1500.50);
        assert_eq!(account.kind, AccountKind::Current);
        assert_eq!(account.created_at.to_string(), "2025-01-15");
    }

    #[test]
    fn test_transaction_embeds_account_snapshot() {
        let json = r#"{
            "id": "42",
            "kind": "DEPOSIT",
            "amount": 500.0,
            "createdAt": "2025-03-01",
            "account": {
                "id": "1",
                "balance": 2000.50,
                "kind": "CURRENT",
                "createdAt": "2025-01-15"
            }
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.kind, TransactionKind::Deposit);
        assert_eq!(transaction.account.balance, 2000.50);
    }

    #[test]
    fn test_kind_wire_values_round_trip() {
        for kind in [AccountKind::Current, AccountKind::Savings] {
            assert_eq!(kind.as_wire().parse::<AccountKind>().unwrap(), kind);
        }
        for kind in [TransactionKind::Deposit, TransactionKind::Withdrawal] {
            assert_eq!(kind.as_wire().parse::<TransactionKind>().unwrap(), kind);
        }
        assert!("LIVRET".parse::<AccountKind>().is_err());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(AccountKind::Current.label(), "Courant");
        assert_eq!(AccountKind::Savings.label(), "Épargne");
        assert_eq!(TransactionKind::Deposit.label(), "Dépôt");
        assert_eq!(TransactionKind::Withdrawal.label(), "Retrait");
    }

    #[test]
    fn test_stats_decode() {
        let balance: BalanceStats =
            serde_json::from_str(r#"{"count": 2, "sum": 6500.50, "average": 3250.25}"#).unwrap();
        assert_eq!(balance.count, 2);
        let stats: TransactionStats = serde_json::from_str(
            r#"{"count": 3, "sumDeposits": 700.0, "sumWithdrawals": 150.0}"#,
        )
        .unwrap();
        assert_eq!(stats.sum_withdrawals, 150.0);
    }
}
