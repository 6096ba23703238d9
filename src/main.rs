//! Item Ledger Frontend Entry Point

mod app;
mod components;
mod ledger;
mod models;
mod store;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
