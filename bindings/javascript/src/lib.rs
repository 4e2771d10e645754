//! JavaScript/TypeScript bindings for normdup
//!
//! Thin wrapper around `normdup-core` compiled to WebAssembly.
//! ZERO logic here — all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

/// Normalize text to its canonical comparison key.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Idempotent: normalize(normalize(x)) === normalize(x)
///   - Total: never throws
///
/// @param text - any text
/// @returns Canonical key
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    normdup_core::normalize(text)
}

/// Check one field of a JSON document for duplicates.
///
/// @param text - JSON array of objects (a single object counts as one record)
/// @param field - field name to check
/// @returns JSON string: { status: "no_data" } or { status: "checked", field, record_count, groups, duplicates }
/// @throws Error if the text is not valid JSON
#[wasm_bindgen]
pub fn check(text: &str, field: &str) -> Result<String, JsError> {
    let outcome = normdup_core::check_json(text, field).map_err(|e| JsError::new(&e.to_string()))?;

    serde_json::to_string_pretty(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// List the selectable fields of a JSON document (keys of the first record).
///
/// @param text - JSON document
/// @returns JSON array of field names
/// @throws Error if the text is not valid JSON
#[wasm_bindgen(js_name = "fieldNames")]
pub fn field_names(text: &str) -> Result<String, JsError> {
    let records =
        normdup_core::source::parse_records(text).map_err(|e| JsError::new(&e.to_string()))?;

    serde_json::to_string(&normdup_core::source::field_names(&records))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// The four matching rules, for display to end users.
///
/// @returns JSON array of rule strings
#[wasm_bindgen]
pub fn rules() -> String {
    serde_json::Value::from(normdup_core::RULES.to_vec()).to_string()
}
