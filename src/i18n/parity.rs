//! Structural parity checks between translation dictionaries.
//!
//! Every dictionary must expose the same key structure as the default
//! locale's. A broken dictionary is an authoring defect, so this runs as a
//! build step (`check-translations`) and in tests, never at page load.

use serde_json::Value;

/// Parity report containing errors and warnings about one dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParityReport {
    /// Structural differences that break lookups (missing/extra keys, type changes)
    pub errors: Vec<String>,

    /// Differences that may be intentional (array lengths)
    pub warnings: Vec<String>,
}

impl ParityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Compares a dictionary's JSON tree against a reference tree.
pub struct ParityChecker;

impl ParityChecker {
    /// Compare `candidate` against `reference` (the default locale's dictionary).
    pub fn check(reference: &Value, candidate: &Value) -> ParityReport {
        let mut report = ParityReport::new();
        Self::compare("", reference, candidate, &mut report);
        report
    }

    /// Parse both sources and compare them. Parse failures are reported as errors.
    pub fn check_sources(reference: &str, candidate: &str) -> ParityReport {
        let reference: Value = match serde_json::from_str(reference) {
            Ok(value) => value,
            Err(e) => {
                let mut report = ParityReport::new();
                report.errors.push(format!("Reference dictionary is not valid JSON: {}", e));
                return report;
            }
        };
        match serde_json::from_str(candidate) {
            Ok(candidate) => Self::check(&reference, &candidate),
            Err(e) => {
                let mut report = ParityReport::new();
                report.errors.push(format!("Dictionary is not valid JSON: {}", e));
                report
            }
        }
    }

    fn compare(path: &str, reference: &Value, candidate: &Value, report: &mut ParityReport) {
        match (reference, candidate) {
            (Value::Object(expected), Value::Object(actual)) => {
                for (key, expected_value) in expected {
                    let child = join(path, key);
                    match actual.get(key) {
                        Some(actual_value) => {
                            Self::compare(&child, expected_value, actual_value, report)
                        }
                        None => report.errors.push(format!("Missing key: {}", child)),
                    }
                }
                for key in actual.keys().filter(|key| !expected.contains_key(*key)) {
                    report.errors.push(format!("Unexpected key: {}", join(path, key)));
                }
            }
            (Value::Array(expected), Value::Array(actual)) => {
                if expected.len() != actual.len() {
                    report.warnings.push(format!(
                        "Length mismatch at {}: expected {} entries, found {}",
                        display(path),
                        expected.len(),
                        actual.len()
                    ));
                }
                for (index, (expected_item, actual_item)) in
                    expected.iter().zip(actual.iter()).enumerate()
                {
                    let child = format!("{}[{}]", path, index);
                    Self::compare(&child, expected_item, actual_item, report);
                }
            }
            (expected, actual) if kind(expected) != kind(actual) => {
                report.errors.push(format!(
                    "Type mismatch at {}: expected {}, found {}",
                    display(path),
                    kind(expected),
                    kind(actual)
                ));
            }
            _ => {}
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn display(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
