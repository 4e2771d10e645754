//! Human-readable and JSON output for the CLI.

use colored::Colorize;
use normdup_core::{CheckOutcome, DuplicateClass, Error, GroupingReport, RULES};

/// Message shown when a document holds no records
pub const NO_DATA: &str = "Dataset is empty";

/// Message shown when a non-empty check finds nothing
pub const NO_DUPLICATES: &str = "No duplicates found";

/// Stdout writer that honours `--quiet`
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn line(&self, text: &str) {
        if !self.quiet {
            println!("{}", text);
        }
    }

    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(value)?;
        self.line(&text);
        Ok(())
    }
}

pub fn keys(out: &Output, record_count: usize, fields: &[String]) {
    if record_count == 0 {
        out.line(&NO_DATA.yellow().to_string());
        return;
    }
    out.line(&format!("{} record(s), fields of the first record:", record_count));
    for (i, field) in fields.iter().enumerate() {
        out.line(&format!("  {}. {}", i + 1, field.bold()));
    }
}

pub fn rules(out: &Output) {
    out.line(&"Matching rules:".bold().to_string());
    for (i, rule) in RULES.iter().enumerate() {
        out.line(&format!("  {}. {}", i + 1, rule));
    }
}

pub fn outcome(out: &Output, field: &str, outcome: &CheckOutcome) {
    out.line(&format!("{} {}", "Field:".bold(), field));
    rules(out);
    out.line("");

    match outcome {
        CheckOutcome::NoData => out.line(&NO_DATA.yellow().to_string()),
        CheckOutcome::Checked(report) => report_body(out, report),
    }
}

fn report_body(out: &Output, report: &GroupingReport) {
    if !report.has_duplicates() {
        out.line(&NO_DUPLICATES.green().to_string());
        return;
    }

    out.line(&format!(
        "{} {} group(s), {} of {} record(s)",
        "Duplicate groups:".bold(),
        report.duplicates.len(),
        report.duplicate_record_count(),
        report.record_count
    ));
    for class in &report.duplicates {
        out.line("");
        duplicate_class(out, class);
    }
}

fn duplicate_class(out: &Output, class: &DuplicateClass) {
    out.line(&format!(
        "{} \"{}\" ({} records)",
        "Key:".red().bold(),
        class.key,
        class.members
    ));
    for entry in &class.tally {
        out.line(&format!("  value \"{}\" ({})", entry.value.bold(), entry.count));
    }
}
