//! Ledger Core
//!
//! Pure collection and aggregation logic: id assignment for appended rows and
//! the total-value computation over the current snapshot. No reactive types
//! here, so everything is unit-testable on the native host.

use crate::models::Item;

/// Build the row appended by the "Add" action.
///
/// Ids follow the append formula `current length + 1` and are stable once
/// assigned. The formula guarantees uniqueness only while the collection is
/// append-only; there is no removal path.
pub fn next_item(items: &[Item]) -> Item {
    Item {
        id: items.len() as u32 + 1,
        name: String::new(),
        value: "0".to_string(),
    }
}

/// Coerce raw field text to a number.
///
/// Empty (or whitespace-only) input counts as 0, as does anything that fails
/// to parse as a finite f64.
pub fn coerce_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Sum of every row's coerced value.
///
/// Pure function of the snapshot: recomputing on an unchanged collection
/// yields the same result. O(n), recomputed in full on every change.
pub fn total_value(items: &[Item]) -> f64 {
    items.iter().map(|item| coerce_value(&item.value)).sum()
}
