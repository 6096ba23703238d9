//! Item Ledger App
//!
//! Root component: provides the store, derives the running total, and lays
//! out the form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemButton, ItemList, TotalBar};
use crate::ledger::total_value;
use crate::store::{LedgerState, LedgerStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(LedgerState::default());

    // Provide store to all children
    provide_context(store);

    // Recomputed after every append or field edit
    let total = Memo::new(move |_| {
        let value = total_value(&store.items().get());
        web_sys::console::log_1(&format!("[LEDGER] computing total value: {}", value).into());
        value
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Item Ledger"</h1>

                <AddItemButton />

                <ItemList />

                <TotalBar total=total />

                <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>
            </main>
        </div>
    }
}
