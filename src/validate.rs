//! Required-Field Validation
//!
//! Pure per-row checks surfaced by the row component. The aggregator never
//! consults these; rows with errors still participate in the total.

use crate::models::Item;

/// Field-level validation tag for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    ValueRequired,
}

impl FieldError {
    /// Short message for inline display
    pub fn message(self) -> &'static str {
        match self {
            FieldError::NameRequired => "name is required",
            FieldError::ValueRequired => "value is required",
        }
    }
}

/// Check the required fields of a single row.
///
/// Non-numeric value text is not an error here; the aggregator's coercion
/// policy handles it.
pub fn validate_item(item: &Item) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if item.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }
    if item.value.trim().is_empty() {
        errors.push(FieldError::ValueRequired);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str, value: &str) -> Item {
        Item {
            id: 1,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_complete_item_has_no_errors() {
        assert!(validate_item(&make_item("Rent", "1200")).is_empty());
    }

    #[test]
    fn test_empty_name_is_tagged() {
        assert_eq!(
            validate_item(&make_item("", "10")),
            vec![FieldError::NameRequired]
        );
        assert_eq!(
            validate_item(&make_item("   ", "10")),
            vec![FieldError::NameRequired]
        );
    }

    #[test]
    fn test_empty_value_is_tagged() {
        assert_eq!(
            validate_item(&make_item("Rent", "")),
            vec![FieldError::ValueRequired]
        );
    }

    #[test]
    fn test_fresh_item_is_missing_name_only() {
        assert_eq!(
            validate_item(&make_item("", "0")),
            vec![FieldError::NameRequired]
        );
    }

    #[test]
    fn test_non_numeric_value_is_not_a_validation_error() {
        assert!(validate_item(&make_item("Rent", "abc")).is_empty());
    }
}
