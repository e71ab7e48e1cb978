use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::model::AccountKind;
use crate::refetch::{self, WriteOp};
use crate::state::{self, SubmitState};

const DEFAULT_KIND: AccountKind = AccountKind::Current;

// balance + kind form; a created account shows up in the list through the
// refetch binding, not through local bookkeeping
#[component]
pub fn AccountCreator() -> Element {
    let client = use_context::<ApiClient>();
    let mut balance_input = use_signal(String::new);
    let mut kind = use_signal(|| DEFAULT_KIND);
    let mut submit = use_signal(|| SubmitState::Idle);

    rsx! {
        section { id: "account-creator", class: "panel",
            h2 { "Nouveau compte" }
            form {
                label { r#for: "balance-input", "Solde initial :" }
                input {
                    r#type: "number",
                    id: "balance-input",
                    min: "0",
                    step: 0.01,
                    placeholder: "0.00",
                    value: "{balance_input}",
                    oninput: move |event| {
                        balance_input.set(event.value());
                        submit.set(SubmitState::Idle);
                    },
                }
                label { r#for: "kind-select", "Type de compte :" }
                select {
                    id: "kind-select",
                    onchange: move |event| {
                        if let Ok(kind_value) = event.value().parse() {
                            kind.set(kind_value);
                        }
                        submit.set(SubmitState::Idle);
                    },
                    option {
                        value: "CURRENT",
                        selected: *kind.read() == AccountKind::Current,
                        "Courant"
                    }
                    option {
                        value: "SAVINGS",
                        selected: *kind.read() == AccountKind::Savings,
                        "Épargne"
                    }
                }
                button {
                    r#type: "submit",
                    disabled: submit.read().is_submitting(),
                    onclick: move |_| {
                        let client = client.clone();
                        async move {
                            let balance = match state::validate_balance(
                                balance_input.read().as_str(),
                            ) {
                                Ok(balance) => balance,
                                Err(message) => {
                                    submit.set(SubmitState::Failed(message.to_string()));
                                    return;
                                }
                            };
                            submit.set(SubmitState::Submitting);
                            // copy out of the signals before awaiting
                            let kind_value = *kind.read();
                            match client.create_account(balance, kind_value).await {
                                Ok(account) => {
                                    tracing::info!(id = %account.id, "account created");
                                    refetch::invalidate(WriteOp::CreateAccount);
                                    balance_input.set(String::new());
                                    kind.set(DEFAULT_KIND);
                                    submit.set(SubmitState::Success(
                                        state::MSG_ACCOUNT_CREATED.to_string(),
                                    ));
                                }
                                Err(error) => {
                                    tracing::error!(%error, "account creation failed");
                                    // input stays in place for correction
                                    submit.set(SubmitState::Failed(error.to_string()));
                                }
                            }
                        }
                    },
                    "Créer le compte"
                }
            }
            if let Some((class, message)) = submit.read().notice() {
                p { class: "{class}", "{message}" }
            }
        }
    }
}
