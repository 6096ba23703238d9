//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through the store's write path, which is the change notification that
//! drives total recomputation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::ledger::next_item;
use crate::models::Item;

/// Global ledger state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct LedgerState {
    /// All rows in the current session, in insertion order
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type LedgerStore = Store<LedgerState>;

/// Get the ledger store from context
pub fn use_ledger_store() -> LedgerStore {
    expect_context::<LedgerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a fresh row (sequential id, empty name, value "0")
pub fn store_add_item(store: &LedgerStore) {
    let items_field = store.items();
    let mut items = items_field.write();
    let item = next_item(&items);
    items.push(item);
}

/// Set a row's name by id; unknown ids are ignored
pub fn store_set_name(store: &LedgerStore, item_id: u32, name: String) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| item.name = name);
}

/// Set a row's raw value text by id; unknown ids are ignored
pub fn store_set_value(store: &LedgerStore, item_id: u32, value: String) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| item.value = value);
}
