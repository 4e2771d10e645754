//! Record and field value model
//!
//! Input documents are loosely shaped: a field may be missing, null, a
//! scalar, or a nested structure. [`FieldValue`] captures every case as an
//! explicit variant so that [`FieldValue::stringify`] is a total mapping to
//! text, the StringifiedValue that grouping works on.

use indexmap::IndexMap;

// ── Field values ──────────────────────────────────────────

/// A single field value as found in a record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Key not present on the record
    Absent,
    /// Explicit `null`
    Null,
    /// String value
    Text(String),
    /// Numeric value, kept as parsed
    Number(serde_json::Number),
    /// Boolean value
    Boolean(bool),
    /// Nested object or array, held as its compact JSON text
    Compound(String),
}

/// Shared value returned for lookups of missing fields
static ABSENT: FieldValue = FieldValue::Absent;

impl FieldValue {
    /// Convert from a parsed JSON value. Total.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Boolean(*b),
            serde_json::Value::Number(n) => FieldValue::Number(n.clone()),
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            // Display on Value is compact JSON, in source key order
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                FieldValue::Compound(json.to_string())
            }
        }
    }

    /// Render the value as text.
    ///
    /// - `Absent` and `Null` become the empty string
    /// - `Compound` yields its structural JSON text
    /// - everything else uses its natural textual form
    pub fn stringify(&self) -> String {
        match self {
            FieldValue::Absent | FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => number_text(n),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Compound(json) => json.clone(),
        }
    }

    /// True for `Absent` and `Null`
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Absent | FieldValue::Null)
    }

    /// Variant name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Compound(_) => "compound",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Number(i.into())
    }
}

/// Integers print as-is. Floats holding an integral value print without a
/// fractional part (`3.0` → `3`); other floats use the shortest
/// round-trip form.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

// ── Records ───────────────────────────────────────────────

/// One input record: field name → value, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a parsed JSON value.
    ///
    /// Objects map field by field. Any other value yields a record with no
    /// fields, so every lookup on it is `Absent`.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                .collect(),
            _ => Record::new(),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Value stored under `field`, or `Absent` when the record lacks it
    pub fn value(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&ABSENT)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_missing_values_are_empty() {
        assert_eq!(FieldValue::Absent.stringify(), "");
        assert_eq!(FieldValue::Null.stringify(), "");
    }

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(FieldValue::from("A-1").stringify(), "A-1");
        assert_eq!(FieldValue::from(true).stringify(), "true");
        assert_eq!(FieldValue::from(false).stringify(), "false");
        assert_eq!(FieldValue::from(-42i64).stringify(), "-42");
    }

    #[test]
    fn test_stringify_numbers_natural_form() {
        let cases = [
            (json!(7), "7"),
            (json!(18446744073709551615u64), "18446744073709551615"),
            (json!(3.0), "3"),
            (json!(-0.0), "0"),
            (json!(2.5), "2.5"),
            (json!(0.1), "0.1"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                FieldValue::from_json(&input).stringify(),
                expected,
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_stringify_compound_is_compact_json_in_source_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": [1, 2, {"b": null}]}"#).unwrap();
        let field = FieldValue::from_json(&value);
        assert_eq!(field.kind(), "compound");
        assert_eq!(field.stringify(), r#"{"zeta":1,"alpha":[1,2,{"b":null}]}"#);
    }

    #[test]
    fn test_from_json_variants() {
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from_json(&json!(true)), FieldValue::Boolean(true));
        assert_eq!(
            FieldValue::from_json(&json!("x")),
            FieldValue::Text("x".into())
        );
        assert_eq!(
            FieldValue::from_json(&json!([])),
            FieldValue::Compound("[]".into())
        );
    }

    #[test]
    fn test_record_missing_field_is_absent() {
        let record = Record::from_json(&json!({"code": "A-1"}));
        assert_eq!(record.value("code"), &FieldValue::Text("A-1".into()));
        assert_eq!(record.value("name"), &FieldValue::Absent);
        assert!(record.value("name").is_missing());
    }

    #[test]
    fn test_record_keys_keep_document_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let record = Record::from_json(&value);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_record_from_non_object_has_no_fields() {
        for value in [json!("text"), json!(5), json!(null), json!([1, 2])] {
            let record = Record::from_json(&value);
            assert!(record.is_empty(), "input: {}", value);
            assert_eq!(record.value("anything"), &FieldValue::Absent);
        }
    }

    #[test]
    fn test_record_insert_and_collect() {
        let mut record = Record::new();
        record.insert("code", "B2");
        record.insert("flag", true);
        assert_eq!(record.len(), 2);
        assert!(record.contains("flag"));

        let collected: Record = vec![("code", FieldValue::from("B2")), ("flag", FieldValue::from(true))]
            .into_iter()
            .collect();
        assert_eq!(record, collected);
    }
}
