use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::refetch::{self, ReadQuery};
use crate::state::{self, RemoteData};

// show every account as a card row, with the count and the running total
#[component]
pub fn AccountList() -> Element {
    let client = use_context::<ApiClient>();

    let accounts = use_resource(move || {
        let client = client.clone();
        // reading the generation restarts this read on every invalidation
        let _generation = refetch::generation(ReadQuery::Accounts);
        async move { client.accounts().await }
    });

    let current = accounts.read();

    rsx! {
        section { id: "account-list", class: "panel",
            header { class: "panel-header",
                h2 { "Comptes" }
                button {
                    class: "refresh-button",
                    onclick: move |_| refetch::refresh(ReadQuery::Accounts),
                    "Rafraîchir"
                }
            }
            match RemoteData::from_resource((*current).as_ref()) {
                RemoteData::Loading => rsx! {
                    p { class: "loading", "Chargement des comptes..." }
                },
                RemoteData::Error(error) => rsx! {
                    p { class: "error-message", "{error}" }
                },
                RemoteData::Ready(accounts) => rsx! {
                    ul { class: "card-list",
                        for account in accounts.iter() {
                            li { key: "{account.id}", class: "card",
                                span { class: "card-kind", "{account.kind.label()}" }
                                span { class: "card-amount", "{account.balance:.2} €" }
                                span { class: "card-date", "ouvert le {account.created_at}" }
                            }
                        }
                    }
                    p { class: "count-label", "{state::account_count_label(accounts.len())}" }
                    p { class: "running-total",
                        "Solde cumulé: {state::balance_total(accounts):.2} €"
                    }
                },
            }
        }
    }
}
