//! View-side state machines and input validation
//!
//! Read views move through a three-state machine, write forms through a
//! four-state one. Both are explicit sum types so a view cannot hold an
//! impossible combination like "loading with an error".

use crate::api::ApiError;
use crate::model::Account;

pub const MSG_INVALID_BALANCE: &str = "Solde invalide";
pub const MSG_INVALID_AMOUNT: &str = "Montant invalide";
pub const MSG_NO_ACCOUNT: &str = "Aucun compte sélectionné";
pub const MSG_ACCOUNT_CREATED: &str = "Compte créé";
pub const MSG_TRANSACTION_RECORDED: &str = "Transaction enregistrée";

/// Outcome of a read subscription as the view renders it.
#[derive(Debug, PartialEq)]
pub enum RemoteData<'a, T> {
    Loading,
    Error(&'a ApiError),
    Ready(&'a T),
}

impl<'a, T> RemoteData<'a, T> {
    /// Maps a resource's latest settled value; a resource that has not
    /// settled yet is still loading. A restarted read keeps the previous
    /// outcome on screen until the new response lands.
    pub fn from_resource(value: Option<&'a crate::api::Result<T>>) -> Self {
        match value {
            None => RemoteData::Loading,
            Some(Err(error)) => RemoteData::Error(error),
            Some(Ok(data)) => RemoteData::Ready(data),
        }
    }
}

/// Lifecycle of a write form. Validation happens synchronously between
/// `Idle` and `Submitting`; invalid input never reaches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success(String),
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Notice to surface under the form, with its CSS class.
    pub fn notice(&self) -> Option<(&'static str, &str)> {
        match self {
            SubmitState::Idle | SubmitState::Submitting => None,
            SubmitState::Success(message) => Some(("notice notice-success", message.as_str())),
            SubmitState::Failed(message) => Some(("notice notice-error", message.as_str())),
        }
    }
}

/// Initial balance of a new account: must be provided and non-negative.
pub fn validate_balance(input: &str) -> Result<f64, &'static str> {
    match input.trim().parse::<f64>() {
        Ok(balance) if balance >= 0.0 => Ok(balance),
        _ => Err(MSG_INVALID_BALANCE),
    }
}

/// Transaction input: the amount is checked strictly before the account
/// selection.
pub fn validate_transaction(amount: &str, account_id: &str) -> Result<f64, &'static str> {
    let amount = match amount.trim().parse::<f64>() {
        Ok(amount) if amount > 0.0 => amount,
        _ => return Err(MSG_INVALID_AMOUNT),
    };
    if account_id.is_empty() {
        return Err(MSG_NO_ACCOUNT);
    }
    Ok(amount)
}

/// Count label under the account list.
pub fn account_count_label(count: usize) -> String {
    format!("Total: {count} compte(s)")
}

/// Count label under the transaction list.
pub fn transaction_count_label(count: usize) -> String {
    format!("Total: {count} transaction(s)")
}

/// Running total of the listed balances, computed client-side for display.
pub fn balance_total(accounts: &[Account]) -> f64 {
    accounts.iter().map(|a| a.balance).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccountKind;
    use chrono::NaiveDate;

    fn account(id: &str, balance: f64) -> Account {
        Account {
            id: id.into(),
            balance,
            kind: AccountKind::Current,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_remote_data_covers_the_three_states() {
        let loading = RemoteData::from_resource(None::<&crate::api::Result<Vec<Account>>>);
        assert_eq!(loading, RemoteData::Loading);

        let failed: crate::api::Result<Vec<Account>> =
            Err(ApiError::Backend("panne serveur".into()));
        assert_eq!(
            RemoteData::from_resource(Some(&failed)),
            RemoteData::Error(&ApiError::Backend("panne serveur".into()))
        );

        let ready: crate::api::Result<Vec<Account>> = Ok(vec![account("1", 10.0)]);
        assert!(matches!(
            RemoteData::from_resource(Some(&ready)),
            RemoteData::Ready(accounts) if accounts.len() == 1
        ));
    }

    #[test]
    fn test_balance_must_be_present_and_non_negative() {
        assert_eq!(validate_balance("1500.50"), Ok(1500.50));
        assert_eq!(validate_balance(" 0 "), Ok(0.0));
        assert_eq!(validate_balance(""), Err(MSG_INVALID_BALANCE));
        assert_eq!(validate_balance("abc"), Err(MSG_INVALID_BALANCE));
        assert_eq!(validate_balance("-1"), Err(MSG_INVALID_BALANCE));
    }

    #[test]
    fn test_amount_must_be_strictly_positive() {
        assert_eq!(validate_transaction("500.00", "1"), Ok(500.0));
        assert_eq!(validate_transaction("0", "1"), Err(MSG_INVALID_AMOUNT));
        assert_eq!(validate_transaction("-3", "1"), Err(MSG_INVALID_AMOUNT));
        assert_eq!(validate_transaction("", "1"), Err(MSG_INVALID_AMOUNT));
    }

    #[test]
    fn test_amount_is_checked_before_account_selection() {
        // both invalid: the amount message wins
        assert_eq!(validate_transaction("", ""), Err(MSG_INVALID_AMOUNT));
        // valid amount, no selection
        assert_eq!(validate_transaction("12.5", ""), Err(MSG_NO_ACCOUNT));
    }

    #[test]
    fn test_count_labels() {
        assert_eq!(account_count_label(2), "Total: 2 compte(s)");
        assert_eq!(account_count_label(0), "Total: 0 compte(s)");
        assert_eq!(transaction_count_label(3), "Total: 3 transaction(s)");
    }

    #[test]
    fn test_balance_total_sums_client_side() {
        let accounts = [account("1", 1500.50), account("2", 5000.00)];
        assert_eq!(balance_total(&accounts), 6500.50);
        assert_eq!(balance_total(&[]), 0.0);
    }

    #[test]
    fn test_submit_state_notices() {
        assert_eq!(SubmitState::Idle.notice(), None);
        assert_eq!(SubmitState::Submitting.notice(), None);
        assert!(SubmitState::Submitting.is_submitting());
        assert_eq!(
            SubmitState::Success(MSG_ACCOUNT_CREATED.into()).notice(),
            Some(("notice notice-success", MSG_ACCOUNT_CREATED))
        );
        assert_eq!(
            SubmitState::Failed("Solde insuffisant".into()).notice(),
            Some(("notice notice-error", "Solde insuffisant"))
        );
    }
}
