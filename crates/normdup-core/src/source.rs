//! Record ingestion — turns a JSON document into records
//!
//! A top-level array yields one record per element. Any other top-level
//! value is treated as a single-element array. The selectable fields are
//! the keys of the first record only; later records are not checked
//! against them.

use std::path::Path;

use crate::value::Record;
use crate::{Error, Result};

/// Parse JSON text into records
///
/// # Errors
/// Returns `MalformedSource` if the text is not valid JSON.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let document = parse_document(text)?;
    let records: Vec<Record> = document
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(index, "element is not an object; all its fields are absent");
            }
            Record::from_json(item)
        })
        .collect();
    tracing::debug!(records = records.len(), "parsed records");
    Ok(records)
}

/// Read and parse a JSON file into records
///
/// # Errors
/// Returns `Io` if the file cannot be read, `MalformedSource` if it is not
/// valid JSON.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = read_source(path)?;
    parse_records(&text)
}

/// Read a source file to a string
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Selectable field names: the keys of the first record, in document order
///
/// Empty when there are no records.
pub fn field_names(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|first| first.keys().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Pretty-print the document (2-space indent) after array wrapping
///
/// # Errors
/// Returns `MalformedSource` if the text is not valid JSON.
pub fn preview(text: &str) -> Result<String> {
    let document = serde_json::Value::Array(parse_document(text)?);
    Ok(serde_json::to_string_pretty(&document)?)
}

fn parse_document(text: &str) -> Result<Vec<serde_json::Value>> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| Error::MalformedSource(e.to_string()))?;
    Ok(match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    })
}
