//! Controlled vocabularies from the NWSS data dictionary.
//!
//! The literal lists live in `data/value_sets.csv` and are compiled into the
//! binary. Each row is `value_set,value`. A row with an empty value marks the
//! set as accepting the "not provided" sentinel.

use std::collections::BTreeMap;

use csv::ReaderBuilder;
use tracing::debug;

use nwss_model::{ValueSet, ValueSetRegistry};

use crate::error::StandardsError;

const VALUE_SETS_CSV: &str = include_str!("../data/value_sets.csv");

/// Load the bundled NWSS value sets.
pub fn load_value_sets() -> Result<ValueSetRegistry, StandardsError> {
    parse_value_sets(VALUE_SETS_CSV)
}

/// Parse value sets from CSV text with a `value_set,value` header.
///
/// Sets keep the order in which their values first appear.
pub fn parse_value_sets(text: &str) -> Result<ValueSetRegistry, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut values: BTreeMap<String, (Vec<String>, bool)> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).unwrap_or("").trim();
        if name.is_empty() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(StandardsError::UnnamedValueSet { line });
        }
        // Values are kept verbatim: membership is an exact match.
        let value = record.get(1).unwrap_or("");
        let entry = values.entry(name.to_string()).or_default();
        if value.is_empty() {
            entry.1 = true;
        } else {
            entry.0.push(value.to_string());
        }
    }

    let registry: ValueSetRegistry = values
        .into_iter()
        .map(|(name, (literals, not_provided))| {
            let set = ValueSet::new(name, literals);
            if not_provided {
                set.with_not_provided()
            } else {
                set
            }
        })
        .collect();
    debug!(value_sets = registry.len(), "loaded value sets");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_row_marks_not_provided() {
        let registry = parse_value_sets("value_set,value\nyes_no,yes\nyes_no,no\nyes_no,\n")
            .expect("parse");
        let set = registry.get("yes_no").expect("yes_no");
        assert_eq!(set.values(), ["yes", "no"]);
        assert!(set.allows_not_provided());
        assert!(registry.contains("yes_no", ""));
    }

    #[test]
    fn values_are_not_trimmed() {
        let registry = parse_value_sets("value_set,value\npad, yes\n").expect("parse");
        assert!(registry.contains("pad", " yes"));
        assert!(!registry.contains("pad", "yes"));
    }

    #[test]
    fn unnamed_row_is_rejected() {
        let err = parse_value_sets("value_set,value\n,yes\n").unwrap_err();
        assert!(matches!(err, StandardsError::UnnamedValueSet { line: 2 }));
    }
}
