//! Python bindings for normdup
//!
//! Thin wrapper around `normdup-core` — ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Normalize text to its canonical comparison key.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Idempotent: normalize(normalize(x)) == normalize(x)
///   - Total: never raises
///
/// Args:
///     text: any text
///
/// Returns:
///     Canonical key
#[pyfunction]
fn normalize(text: &str) -> String {
    normdup_core::normalize(text)
}

/// Check one field of a JSON document for duplicates.
///
/// Args:
///     text: JSON array of objects (a single object is treated as one record)
///     field: field name to check
///
/// Returns:
///     JSON string, either {"status": "no_data"} or
///     {
///         "status": "checked",
///         "field": str,
///         "record_count": int,
///         "groups": {key: [value, ...]},
///         "duplicates": [{"key": str, "members": int, "tally": [{"value": str, "count": int}]}]
///     }
///
/// Raises:
///     ValueError: If the text is not valid JSON
#[pyfunction]
fn check(text: &str, field: &str) -> PyResult<String> {
    let outcome =
        normdup_core::check_json(text, field).map_err(|e| PyValueError::new_err(e.to_string()))?;

    serde_json::to_string_pretty(&outcome)
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// List the selectable fields of a JSON document (keys of the first record).
///
/// Raises:
///     ValueError: If the text is not valid JSON
#[pyfunction]
fn field_names(text: &str) -> PyResult<Vec<String>> {
    let records = normdup_core::source::parse_records(text)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(normdup_core::source::field_names(&records))
}

/// The four matching rules, for display to end users.
#[pyfunction]
fn rules() -> Vec<&'static str> {
    normdup_core::RULES.to_vec()
}

/// normdup Python module — normalization-based duplicate checker
#[pymodule]
fn normdup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    m.add_function(wrap_pyfunction!(field_names, m)?)?;
    m.add_function(wrap_pyfunction!(rules, m)?)?;
    Ok(())
}
