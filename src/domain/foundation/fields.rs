//! Total lookups over untyped JSON documents.
//!
//! Webhook payloads arrive as loosely-typed JSON: numbers are frequently
//! serialised as strings, optional keys may be missing or `null`, and nested
//! objects may be replaced by a bare identifier. Every helper here returns a
//! value or `None`; none of them can fail.

use serde_json::{Map, Value};

/// Returns the value stored under `key`, treating `null` as absent.
///
/// Non-object documents have no keys.
pub fn field<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    document
        .as_object()
        .and_then(|object| object.get(key))
        .filter(|value| !value.is_null())
}

/// Returns true if `key` is present with a non-null value.
pub fn has_field(document: &Value, key: &str) -> bool {
    field(document, key).is_some()
}

/// Reads a string field. Only JSON strings qualify.
pub fn str_field<'a>(document: &'a Value, key: &str) -> Option<&'a str> {
    field(document, key).and_then(Value::as_str)
}

/// Reads an integer field from a JSON number or a numeric string.
pub fn i64_field(document: &Value, key: &str) -> Option<i64> {
    field(document, key).and_then(value_as_i64)
}

/// Reads a float field from a JSON number or a numeric string.
pub fn f64_field(document: &Value, key: &str) -> Option<f64> {
    field(document, key).and_then(value_as_f64)
}

/// Reads a nested object.
pub fn object_field<'a>(document: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    field(document, key).and_then(Value::as_object)
}

/// Reads a list, yielding an empty slice when absent or not a list.
pub fn list_field<'a>(document: &'a Value, key: &str) -> &'a [Value] {
    field(document, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Interprets a value as a boolean flag.
///
/// The sender encodes flags inconsistently (`true`, `"true"`, `"TRUE"`,
/// `"1"`, `0`). Only a JSON `true` or a case-insensitive `"true"` string
/// counts; everything else, including absence, is `false`.
pub fn flag_value(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Clones the value into an owned object, substituting an empty object for
/// anything that is not one.
pub fn object_or_empty(value: Option<&Value>) -> Map<String, Value> {
    value
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ══════════════════════════════════════════════════════════════
    // Lookup Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn field_treats_null_as_absent() {
        let doc = json!({"status": null, "gateway": "stripe"});
        assert!(field(&doc, "status").is_none());
        assert_eq!(field(&doc, "gateway"), Some(&json!("stripe")));
    }

    #[test]
    fn non_object_document_has_no_fields() {
        assert!(field(&json!([1, 2, 3]), "0").is_none());
        assert!(field(&json!("text"), "text").is_none());
        assert!(!has_field(&Value::Null, "id"));
    }

    #[test]
    fn str_field_ignores_numbers() {
        let doc = json!({"trans_num": 12345, "status": "complete"});
        assert_eq!(str_field(&doc, "trans_num"), None);
        assert_eq!(str_field(&doc, "status"), Some("complete"));
    }

    // ══════════════════════════════════════════════════════════════
    // Numeric Coercion Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn i64_field_accepts_numbers_and_numeric_strings() {
        let doc = json!({"a": 7, "b": "42", "c": " 3 ", "d": "seven", "e": 2.0, "f": 2.5});
        assert_eq!(i64_field(&doc, "a"), Some(7));
        assert_eq!(i64_field(&doc, "b"), Some(42));
        assert_eq!(i64_field(&doc, "c"), Some(3));
        assert_eq!(i64_field(&doc, "d"), None);
        assert_eq!(i64_field(&doc, "e"), Some(2));
        assert_eq!(i64_field(&doc, "f"), None);
    }

    #[test]
    fn f64_field_accepts_numbers_and_numeric_strings() {
        let doc = json!({"amount": "19.99", "total": 21.5, "tax": "n/a"});
        assert_eq!(f64_field(&doc, "amount"), Some(19.99));
        assert_eq!(f64_field(&doc, "total"), Some(21.5));
        assert_eq!(f64_field(&doc, "tax"), None);
        assert_eq!(f64_field(&doc, "missing"), None);
    }

    // ══════════════════════════════════════════════════════════════
    // Flag Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn flag_value_is_case_insensitive_true() {
        assert!(flag_value(Some(&json!("true"))));
        assert!(flag_value(Some(&json!("TRUE"))));
        assert!(flag_value(Some(&json!("True"))));
        assert!(flag_value(Some(&json!(true))));
    }

    #[test]
    fn flag_value_defaults_to_false() {
        assert!(!flag_value(None));
        assert!(!flag_value(Some(&json!("maybe"))));
        assert!(!flag_value(Some(&json!("1"))));
        assert!(!flag_value(Some(&json!(1))));
        assert!(!flag_value(Some(&json!(false))));
        assert!(!flag_value(Some(&json!({"nested": true}))));
    }

    #[test]
    fn flag_value_does_not_trim_whitespace() {
        assert!(!flag_value(Some(&json!(" true "))));
        assert!(!flag_value(Some(&json!("true\n"))));
    }

    // ══════════════════════════════════════════════════════════════
    // Collection Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn list_field_defaults_to_empty() {
        let doc = json!({"items": [1, 2], "scalar": 5});
        assert_eq!(list_field(&doc, "items").len(), 2);
        assert!(list_field(&doc, "scalar").is_empty());
        assert!(list_field(&doc, "missing").is_empty());
    }

    #[test]
    fn object_or_empty_replaces_identifiers() {
        assert!(object_or_empty(Some(&json!("0"))).is_empty());
        assert!(object_or_empty(None).is_empty());
        assert_eq!(object_or_empty(Some(&json!({"id": 1}))).len(), 1);
    }
}
