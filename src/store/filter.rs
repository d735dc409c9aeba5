//! Query filters
//!
//! The list surface only needs exact string equality on a single field,
//! so that is all the filter type expresses.

use serde_json::Value;

/// Exact string equality on one document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatch {
    /// Field to compare
    pub field: String,
    /// Value the field must equal
    pub value: String,
}

impl ExactMatch {
    /// Create a new filter
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether `document` carries `field` as a string equal to `value`.
    ///
    /// Absent fields, nulls, and non-string values never match.
    pub fn matches(&self, document: &Value) -> bool {
        document
            .get(&self.field)
            .and_then(Value::as_str)
            .is_some_and(|v| v == self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_equal_string() {
        let filter = ExactMatch::new("user_id", "u-123");
        assert!(filter.matches(&json!({"user_id": "u-123", "date": "2025-01-15"})));
    }

    #[test]
    fn test_rejects_different_value() {
        let filter = ExactMatch::new("user_id", "u-123");
        assert!(!filter.matches(&json!({"user_id": "u-456"})));
    }

    #[test]
    fn test_rejects_absent_field_and_null() {
        let filter = ExactMatch::new("user_id", "u-123");
        assert!(!filter.matches(&json!({"date": "2025-01-15"})));
        assert!(!filter.matches(&json!({"user_id": null})));
    }

    #[test]
    fn test_rejects_non_string_value() {
        let filter = ExactMatch::new("user_id", "123");
        assert!(!filter.matches(&json!({"user_id": 123})));
    }
}
