//! Web interface components for the Guichet front-end
//!
//! This module contains the four independent Dioxus components of the
//! dashboard. Each one talks to the backend through the shared
//! [`crate::api::ApiClient`] and keeps its failures to itself, so a broken
//! read never takes a sibling down.

/// Account list with manual refresh
mod accounts;
pub use accounts::AccountList;

/// Account creation form
mod create_account;
pub use create_account::AccountCreator;

/// Deposit / withdrawal form
mod record_transaction;
pub use record_transaction::TransactionForm;

/// Transaction list with manual refresh
mod transactions;
pub use transactions::TransactionList;
