//! Total Bar Component
//!
//! Displays the running total of all row values.

use leptos::prelude::*;

#[component]
pub fn TotalBar(total: Memo<f64>) -> impl IntoView {
    view! {
        <div class="total-bar">
            <span class="total-label">"Total value: "</span>
            <span class="total-value">{move || total.get().to_string()}</span>
        </div>
    }
}
