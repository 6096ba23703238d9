//! UI Components
//!
//! Leptos components for the ledger form.

mod add_item_button;
mod item_list;
mod item_row;
mod total_bar;

pub use add_item_button::AddItemButton;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use total_bar::TotalBar;
