//! normdup core - finds records whose field values are equal after normalization
//!
//! Values that differ only by character width, hyphen variant, whitespace
//! or letter case are reported as duplicates of each other, together with
//! the raw variants that were merged.
//!
//! # Architecture
//!
//! ```text
//! JSON text → source → Records ─┐
//!                               ├→ grouping → GroupingMap → DuplicateClasses
//!            field name ────────┘       ↑
//!                                   normalizer
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same records and field always produce the same report
//! - **Total**: normalization and grouping never fail
//! - **Order preserving**: classes and tallies follow first occurrence
//! - **Stateless**: every check builds its grouping from scratch

pub mod error;
pub mod grouping;
pub mod normalizer;
pub mod source;
pub mod value;

pub use error::{Error, Result};
pub use grouping::{group, CheckOutcome, DuplicateClass, GroupingMap, GroupingReport, TallyEntry};
pub use normalizer::{normalize, normalize_value, RULES};
pub use value::{FieldValue, Record};

/// Parse `text` and check `field` in one call
///
/// # Errors
/// Returns `MalformedSource` if the text is not valid JSON.
pub fn check_json(text: &str, field: &str) -> Result<CheckOutcome> {
    let records = source::parse_records(text)?;
    if !records.is_empty() && !source::field_names(&records).iter().any(|f| f == field) {
        tracing::warn!(field, "field is not a key of the first record");
    }
    Ok(group(&records, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: &str = r#"[
        {"id": 1, "code": "A-1"},
        {"id": 2, "code": "Ａ－１"},
        {"id": 3, "code": "a ー 1"},
        {"id": 4, "code": "B2"}
    ]"#;

    #[test]
    fn test_check_json_end_to_end() {
        let outcome = check_json(CODES, "code").unwrap();
        let report = outcome.report().unwrap();
        assert_eq!(report.record_count, 4);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].key, "a-1");
        assert_eq!(report.duplicates[0].members, 3);
    }

    #[test]
    fn test_check_json_empty_document() {
        let outcome = check_json("[]", "code").unwrap();
        assert_eq!(outcome, CheckOutcome::NoData);
    }

    #[test]
    fn test_check_json_unknown_field_still_groups() {
        let outcome = check_json(CODES, "missing").unwrap();
        let report = outcome.report().unwrap();
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.duplicates[0].key, "");
    }

    #[test]
    fn test_check_json_malformed() {
        assert!(matches!(
            check_json("not json", "code"),
            Err(Error::MalformedSource(_))
        ));
    }

    #[test]
    fn test_determinism_100_iterations() {
        let first = check_json(CODES, "code").unwrap();
        for i in 0..100 {
            let result = check_json(CODES, "code").unwrap();
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }

    #[test]
    fn test_report_serialization_is_stable() {
        let outcome = check_json(CODES, "code").unwrap();
        let first = serde_json::to_string(&outcome).unwrap();
        let second = serde_json::to_string(&check_json(CODES, "code").unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
