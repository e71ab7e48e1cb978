//! GraphQL transport and cache client
//!
//! One [`ApiClient`] is built at startup and shared by every view through the
//! Dioxus context. Every read goes to the network; the cache only keeps the
//! latest payload per operation so it can be re-read synchronously, it never
//! short-circuits a request. Writes are not cached, their consistency with
//! the list views goes through [`crate::refetch`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::{
    Account, AccountKind, BalanceStats, Transaction, TransactionKind, TransactionStats,
};

/// Path reverse-proxied to the backend during development.
const DEFAULT_ENDPOINT: &str = "/graphql";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a GraphQL envelope.
    #[error("{0}")]
    Transport(String),
    /// The backend answered with an error list; message text kept verbatim.
    #[error("{0}")]
    Backend(String),
    /// The envelope decoded but the payload did not match the declared shape.
    #[error("réponse illisible: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

// Operation documents, one per contract entry. Reads first, then writes.
const ACCOUNTS: &str = "query Accounts { accounts { id balance kind createdAt } }";
const ACCOUNT: &str = "query Account($id: ID!) { account(id: $id) { id balance kind createdAt } }";
const ACCOUNT_STATS: &str = "query AccountStats { accountStats { count sum average } }";
const ACCOUNTS_BY_KIND: &str = "query AccountsByKind($kind: AccountKind!) { accountsByKind(kind: $kind) { id balance kind createdAt } }";
const ACCOUNT_TRANSACTIONS: &str = "query AccountTransactions($accountId: ID!) { accountTransactions(accountId: $accountId) { id kind amount createdAt account { id balance kind createdAt } } }";
const TRANSACTIONS: &str = "query Transactions { transactions { id kind amount createdAt account { id balance kind createdAt } } }";
const TRANSACTION_STATS: &str = "query TransactionStats { transactionStats { count sumDeposits sumWithdrawals } }";
const CREATE_ACCOUNT: &str = "mutation CreateAccount($balance: Float!, $kind: AccountKind!) { createAccount(balance: $balance, kind: $kind) { id balance kind createdAt } }";
const DELETE_ACCOUNT: &str = "mutation DeleteAccount($id: ID!) { deleteAccount(id: $id) }";
const RECORD_TRANSACTION: &str = "mutation RecordTransaction($kind: TransactionKind!, $amount: Float!, $accountId: ID!) { recordTransaction(kind: $kind, amount: $amount, accountId: $accountId) { id kind amount createdAt account { id balance kind createdAt } } }";

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// Splits a GraphQL envelope into its `data` payload, or the joined error
/// messages when the backend reports any.
fn decode_envelope(body: &str) -> Result<Value> {
    let envelope: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::Backend(message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("empty envelope".into()))
}

fn from_data<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Cache key: operation identity plus its serialized input.
fn cache_key(operation: &str, variables: &Value) -> String {
    format!("{operation}:{variables}")
}

/// Long-lived client for the banking backend.
///
/// All access happens on the single UI thread, so the cache lives behind a
/// plain `RefCell` and cloning the client shares it.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    cache: Rc<RefCell<HashMap<String, Value>>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_endpoint(option_env!("GUICHET_GRAPHQL_URL").unwrap_or(DEFAULT_ENDPOINT))
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// POSTs one operation document and returns its `data` payload. Ambient
    /// cookies ride along with the same-origin request.
    async fn post(&self, document: &str, variables: &Value) -> Result<Value> {
        let request = GraphqlRequest {
            query: document,
            variables,
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        // error statuses may still carry a GraphQL envelope worth surfacing
        if !status.is_success() && serde_json::from_str::<GraphqlResponse>(&body).is_err() {
            return Err(ApiError::Transport(format!("HTTP {status}")));
        }
        decode_envelope(&body)
    }

    /// Network-first read: fetches, then overwrites the cache entry for this
    /// operation + input.
    async fn read(&self, operation: &str, document: &str, variables: Value) -> Result<Value> {
        let key = cache_key(operation, &variables);
        let data = self.post(document, &variables).await?;
        self.cache.borrow_mut().insert(key, data.clone());
        Ok(data)
    }

    /// Latest payload a read stored for this operation + input, if any
    /// request resolved since startup.
    pub fn cached<T: DeserializeOwned>(&self, operation: &str, variables: &Value) -> Option<T> {
        let cache = self.cache.borrow();
        let value = cache.get(&cache_key(operation, variables))?;
        serde_json::from_value(value.clone()).ok()
    }

    // --- reads ---

    pub async fn accounts(&self) -> Result<Vec<Account>> {
        #[derive(Deserialize)]
        struct Data {
            accounts: Vec<Account>,
        }
        let data: Data = from_data(self.read("accounts", ACCOUNTS, json!({})).await?)?;
        Ok(data.accounts)
    }

    pub async fn account(&self, id: &str) -> Result<Option<Account>> {
        #[derive(Deserialize)]
        struct Data {
            account: Option<Account>,
        }
        let variables = json!({ "id": id });
        let data: Data = from_data(self.read("account", ACCOUNT, variables).await?)?;
        Ok(data.account)
    }

    pub async fn account_stats(&self) -> Result<BalanceStats> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            account_stats: BalanceStats,
        }
        let data: Data = from_data(self.read("accountStats", ACCOUNT_STATS, json!({})).await?)?;
        Ok(data.account_stats)
    }

    pub async fn accounts_by_kind(&self, kind: AccountKind) -> Result<Vec<Account>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            accounts_by_kind: Vec<Account>,
        }
        let variables = json!({ "kind": kind.as_wire() });
        let data: Data =
            from_data(self.read("accountsByKind", ACCOUNTS_BY_KIND, variables).await?)?;
        Ok(data.accounts_by_kind)
    }

    pub async fn account_transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            account_transactions: Vec<Transaction>,
        }
        let variables = json!({ "accountId": account_id });
        let data: Data = from_data(
            self.read("accountTransactions", ACCOUNT_TRANSACTIONS, variables)
                .await?,
        )?;
        Ok(data.account_transactions)
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        #[derive(Deserialize)]
        struct Data {
            transactions: Vec<Transaction>,
        }
        let data: Data = from_data(self.read("transactions", TRANSACTIONS, json!({})).await?)?;
        Ok(data.transactions)
    }

    pub async fn transaction_stats(&self) -> Result<TransactionStats> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            transaction_stats: TransactionStats,
        }
        let data: Data =
            from_data(self.read("transactionStats", TRANSACTION_STATS, json!({})).await?)?;
        Ok(data.transaction_stats)
    }

    // --- writes ---

    pub async fn create_account(&self, balance: f64, kind: AccountKind) -> Result<Account> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            create_account: Account,
        }
        let variables = json!({ "balance": balance, "kind": kind.as_wire() });
        let data: Data = from_data(self.post(CREATE_ACCOUNT, &variables).await?)?;
        Ok(data.create_account)
    }

    pub async fn delete_account(&self, id: &str) -> Result<bool> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            delete_account: bool,
        }
        let variables = json!({ "id": id });
        let data: Data = from_data(self.post(DELETE_ACCOUNT, &variables).await?)?;
        Ok(data.delete_account)
    }

    /// Records a deposit or withdrawal. The returned transaction embeds the
    /// account with its balance already adjusted by the backend.
    pub async fn record_transaction(
        &self,
        kind: TransactionKind,
        amount: f64,
        account_id: &str,
    ) -> Result<Transaction> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            record_transaction: Transaction,
        }
        let variables = json!({
            "kind": kind.as_wire(),
            "amount": amount,
            "accountId": account_id,
        });
        let data: Data = from_data(self.post(RECORD_TRANSACTION, &variables).await?)?;
        Ok(data.record_transaction)
    }
}
