use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::model::{Account, TransactionKind};
use crate::refetch::{self, ReadQuery, WriteOp};
use crate::state::{self, SubmitState};

const DEFAULT_KIND: TransactionKind = TransactionKind::Deposit;

// deposit / withdrawal form; the account selector is fed by the accounts
// read and stays empty until that read resolves
#[component]
pub fn TransactionForm() -> Element {
    let client = use_context::<ApiClient>();
    let submit_client = client.clone();
    let mut amount_input = use_signal(String::new);
    let mut kind = use_signal(|| DEFAULT_KIND);
    let mut selected_account = use_signal(String::new);
    let mut submit = use_signal(|| SubmitState::Idle);

    let accounts = use_resource(move || {
        let client = client.clone();
        // re-populates the selector when the accounts query is invalidated
        let _generation = refetch::generation(ReadQuery::Accounts);
        async move { client.accounts().await }
    });

    let current = accounts.read();
    let options: &[Account] = match (*current).as_ref() {
        Some(Ok(accounts)) => accounts.as_slice(),
        _ => &[],
    };

    rsx! {
        section { id: "transaction-form", class: "panel",
            h2 { "Nouvelle transaction" }
            form {
                label { r#for: "transaction-kind", "Type :" }
                select {
                    id: "transaction-kind",
                    onchange: move |event| {
                        if let Ok(kind_value) = event.value().parse() {
                            kind.set(kind_value);
                        }
                        submit.set(SubmitState::Idle);
                    },
                    option {
                        value: "DEPOSIT",
                        selected: *kind.read() == TransactionKind::Deposit,
                        "Dépôt"
                    }
                    option {
                        value: "WITHDRAWAL",
                        selected: *kind.read() == TransactionKind::Withdrawal,
                        "Retrait"
                    }
                }
                label { r#for: "transaction-amount", "Montant :" }
                input {
                    r#type: "number",
                    id: "transaction-amount",
                    min: "0",
                    step: 0.01,
                    placeholder: "0.00",
                    value: "{amount_input}",
                    oninput: move |event| {
                        amount_input.set(event.value());
                        submit.set(SubmitState::Idle);
                    },
                }
                label { r#for: "transaction-account", "Compte :" }
                select {
                    id: "transaction-account",
                    onchange: move |event| {
                        selected_account.set(event.value());
                        submit.set(SubmitState::Idle);
                    },
                    option {
                        value: "",
                        disabled: true,
                        selected: selected_account.read().is_empty(),
                        "Choisir un compte"
                    }
                    for account in options.iter() {
                        option {
                            key: "{account.id}",
                            value: "{account.id}",
                            selected: *selected_account.read() == account.id,
                            "{account.kind.label()} ({account.balance:.2} €)"
                        }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: submit.read().is_submitting(),
                    onclick: move |_| {
                        let client = submit_client.clone();
                        async move {
                            let amount = match state::validate_transaction(
                                amount_input.read().as_str(),
                                selected_account.read().as_str(),
                            ) {
                                Ok(amount) => amount,
                                Err(message) => {
                                    submit.set(SubmitState::Failed(message.to_string()));
                                    return;
                                }
                            };
                            submit.set(SubmitState::Submitting);
                            // copy out of the signals before awaiting
                            let kind_value = *kind.read();
                            let account_id = selected_account.read().clone();
                            match client
                                .record_transaction(kind_value, amount, &account_id)
                                .await
                            {
                                Ok(transaction) => {
                                    tracing::info!(
                                        id = %transaction.id,
                                        balance = transaction.account.balance,
                                        "transaction recorded"
                                    );
                                    // refetches go out first; the notice does
                                    // not wait for them
                                    refetch::invalidate(WriteOp::RecordTransaction);
                                    // amount clears, the selection stays for
                                    // the next entry
                                    amount_input.set(String::new());
                                    submit.set(SubmitState::Success(
                                        state::MSG_TRANSACTION_RECORDED.to_string(),
                                    ));
                                }
                                Err(error) => {
                                    tracing::error!(%error, "transaction failed");
                                    submit.set(SubmitState::Failed(error.to_string()));
                                }
                            }
                        }
                    },
                    "Enregistrer"
                }
            }
            if let Some((class, message)) = submit.read().notice() {
                p { class: "{class}", "{message}" }
            }
        }
    }
}
