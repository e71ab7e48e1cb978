//! Guichet, a browser front-end for the banking demo backend
//!
//! Renders accounts and transactions fetched from an external GraphQL
//! backend, creates accounts and records deposits or withdrawals. All
//! persistence and business rules live server-side; this crate only wires
//! the forms and lists to the backend contract.

mod api;
mod model;
mod refetch;
mod state;
mod views;

use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Application shell: builds the shared client exactly once, then lays the
/// four views out together. No state of its own.
#[component]
fn App() -> Element {
    use_context_provider(api::ApiClient::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        header { class: "app-header",
            h1 { "Guichet" }
            p { class: "tagline", "Démo bancaire" }
        }
        main { class: "dashboard",
            views::AccountCreator {}
            views::AccountList {}
            views::TransactionForm {}
            views::TransactionList {}
        }
    }
}
