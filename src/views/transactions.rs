use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::refetch::{self, ReadQuery};
use crate::state::{self, RemoteData};

// show all transactions as a vertical card list
#[component]
pub fn TransactionList() -> Element {
    let client = use_context::<ApiClient>();

    let transactions = use_resource(move || {
        let client = client.clone();
        let _generation = refetch::generation(ReadQuery::Transactions);
        async move { client.transactions().await }
    });

    let current = transactions.read();

    rsx! {
        section { id: "transaction-list", class: "panel",
            header { class: "panel-header",
                h2 { "Transactions" }
                button {
                    class: "refresh-button",
                    onclick: move |_| refetch::refresh(ReadQuery::Transactions),
                    "Rafraîchir"
                }
            }
            match RemoteData::from_resource((*current).as_ref()) {
                RemoteData::Loading => rsx! {
                    p { class: "loading", "Chargement des transactions..." }
                },
                RemoteData::Error(error) => rsx! {
                    p { class: "error-message", "{error}" }
                },
                RemoteData::Ready(transactions) => rsx! {
                    if transactions.is_empty() {
                        p { class: "empty", "Aucune transaction pour le moment." }
                    } else {
                        ul { class: "card-list",
                            for transaction in transactions.iter() {
                                li { key: "{transaction.id}", class: "card",
                                    span { class: "card-kind", "{transaction.kind.label()}" }
                                    span { class: "card-amount", "{transaction.amount:.2} €" }
                                    span { class: "card-date", "le {transaction.created_at}" }
                                    // balance of the owning account once this
                                    // transaction was applied
                                    span { class: "card-balance",
                                        "solde après: {transaction.account.balance:.2} €"
                                    }
                                }
                            }
                        }
                    }
                    p { class: "count-label",
                        "{state::transaction_count_label(transactions.len())}"
                    }
                },
            }
        }
    }
}
