//! Item Row Component
//!
//! One editable row: id label, name input, raw value input, and the
//! required-field tags for this row.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Item;
use crate::store::{store_set_name, store_set_value, use_ledger_store, LedgerStateStoreFields};
use crate::validate::validate_item;

/// Single editable row bound to the store by id
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_ledger_store();
    let item_id = item.id;

    // Re-checked whenever this row's fields change in the store
    let errors = Memo::new(move |_| {
        store
            .items()
            .get()
            .iter()
            .find(|i| i.id == item_id)
            .map(validate_item)
            .unwrap_or_default()
    });

    view! {
        <div class="item-row">
            <span class="item-id">{format!("#{}", item_id)}</span>

            <input
                type="text"
                class="item-name-input"
                placeholder="Name..."
                prop:value=item.name.clone()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store_set_name(&store, item_id, input.value());
                }
            />

            <input
                type="text"
                class="item-value-input"
                placeholder="0"
                prop:value=item.value.clone()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store_set_value(&store, item_id, input.value());
                }
            />

            {move || {
                let errors = errors.get();
                (!errors.is_empty()).then(|| {
                    let text = errors
                        .iter()
                        .map(|e| e.message())
                        .collect::<Vec<_>>()
                        .join(", ");
                    view! { <span class="field-errors">{text}</span> }
                })
            }}
        </div>
    }
}
