//! Item List Component
//!
//! Renders the ledger rows in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_ledger_store, LedgerStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_ledger_store();

    view! {
        <div class="item-list">
            // Keyed by id: rows are created once and stay bound to the store,
            // so typing in an input does not recreate the element
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| view! { <ItemRow item=item /> }
            />
        </div>
    }
}
