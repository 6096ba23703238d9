//! Frontend Models
//!
//! Data structures for the ledger form.

use serde::{Deserialize, Serialize};

/// One editable row of user-entered data.
///
/// `value` holds the raw field text as typed; the aggregator coerces it to a
/// number, treating invalid text as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub value: String,
}
