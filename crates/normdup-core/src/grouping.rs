//! Grouping engine — partitions records into duplicate classes
//!
//! Every record contributes its StringifiedValue for the selected field to
//! exactly one group, keyed by the canonical key from
//! [`normalize`](crate::normalizer::normalize). Groups with two or more
//! members are duplicate classes.
//!
//! # Ordering
//!
//! - Groups and duplicate classes follow first occurrence of their key in
//!   record order. They are never sorted.
//! - Tally entries follow first occurrence of each raw value in its class.
//!
//! # Lifecycle
//!
//! A [`GroupingMap`] lives for one check. Nothing is cached between calls;
//! re-checking another field builds a fresh map.

use indexmap::IndexMap;

use crate::normalizer::normalize;
use crate::value::Record;

// ── Core Types ────────────────────────────────────────────

/// Canonical key → raw values that produced it, in record order
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct GroupingMap {
    groups: IndexMap<String, Vec<String>>,
}

/// Occurrences of one exact raw value inside a duplicate class
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TallyEntry {
    pub value: String,
    pub count: usize,
}

/// A canonical key shared by two or more records
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DuplicateClass {
    pub key: String,
    /// Number of records in the class
    pub members: usize,
    pub tally: Vec<TallyEntry>,
}

/// Result of checking one field over a non-empty record set
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GroupingReport {
    pub field: String,
    pub record_count: usize,
    pub groups: GroupingMap,
    pub duplicates: Vec<DuplicateClass>,
}

/// Outcome of a check
///
/// An empty record set is reported as `NoData`, which is distinct from a
/// non-empty set with zero duplicate classes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    NoData,
    Checked(GroupingReport),
}

// ── GroupingMap ───────────────────────────────────────────

impl GroupingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `stringified` and append it to its group
    pub fn insert(&mut self, stringified: String) {
        let key = normalize(&stringified);
        self.groups.entry(key).or_default().push(stringified);
    }

    /// Raw values grouped under `key`
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Groups in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of distinct canonical keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total values across all groups
    pub fn value_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Groups with at least two members, each with its exact-value tally
    pub fn duplicates(&self) -> Vec<DuplicateClass> {
        self.groups
            .iter()
            .filter(|(_, values)| values.len() > 1)
            .map(|(key, values)| DuplicateClass {
                key: key.clone(),
                members: values.len(),
                tally: tally(values),
            })
            .collect()
    }
}

/// Count exact (un-normalized) values in first-occurrence order
fn tally(values: &[String]) -> Vec<TallyEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| TallyEntry {
            value: value.to_string(),
            count,
        })
        .collect()
}

// ── Report ────────────────────────────────────────────────

impl GroupingReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Records that belong to some duplicate class
    pub fn duplicate_record_count(&self) -> usize {
        self.duplicates.iter().map(|d| d.members).sum()
    }
}

impl CheckOutcome {
    pub fn report(&self) -> Option<&GroupingReport> {
        match self {
            CheckOutcome::NoData => None,
            CheckOutcome::Checked(report) => Some(report),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, CheckOutcome::NoData)
    }
}

// ── Entry point ───────────────────────────────────────────

/// Group `records` by the canonical key of `field`
///
/// Records lacking `field` contribute an empty value and group with every
/// other empty or null value. Never fails.
///
/// # Example
/// ```
/// use normdup_core::grouping::group;
/// use normdup_core::source::parse_records;
///
/// let records = parse_records(r#"[{"code":"A-1"},{"code":"Ａ－１"},{"code":"B2"}]"#).unwrap();
/// let outcome = group(&records, "code");
/// let report = outcome.report().unwrap();
/// assert_eq!(report.duplicates.len(), 1);
/// assert_eq!(report.duplicates[0].key, "a-1");
/// ```
pub fn group(records: &[Record], field: &str) -> CheckOutcome {
    if records.is_empty() {
        tracing::debug!(field, "no records to group");
        return CheckOutcome::NoData;
    }

    let mut groups = GroupingMap::new();
    for record in records {
        groups.insert(record.value(field).stringify());
    }
    let duplicates = groups.duplicates();

    tracing::debug!(
        field,
        records = records.len(),
        groups = groups.len(),
        duplicate_classes = duplicates.len(),
        "grouped records"
    );

    CheckOutcome::Checked(GroupingReport {
        field: field.to_string(),
        record_count: records.len(),
        groups,
        duplicates,
    })
}
