//! Add Item Button
//!
//! Entry point for appending a fresh row to the ledger.

use leptos::prelude::*;

use crate::store::{store_add_item, use_ledger_store};

#[component]
pub fn AddItemButton() -> impl IntoView {
    let store = use_ledger_store();

    view! {
        <button class="add-item-btn" on:click=move |_| store_add_item(&store)>
            "Add Item"
        </button>
    }
}
